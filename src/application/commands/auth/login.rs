// src/application/commands/auth/login.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::{LoginResponse, PrincipalDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        session::{Principal, Session},
        user::{Email, User},
    },
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResponse> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let now = self.clock.now();
        let token = self.tokens.generate();
        let session = Session {
            id: self.tokens.digest(&token),
            principal: Principal::from(&user),
            issued_at: now,
            expires_at: now + self.session_ttl,
        };
        let expires_at = session.expires_at;
        let user_dto = PrincipalDto::from(&session.principal);

        self.session_store.create(session).await?;
        tracing::info!(user_id = i64::from(user.id), role = %user.role, "login succeeded");

        Ok(LoginResponse {
            token,
            expires_at,
            user: user_dto,
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");

        let email = Email::new(email).map_err(|_| invalid())?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Infrastructure(_) => err,
                _ => invalid(),
            })?;

        Ok(user)
    }
}
