use super::AdminQueryService;
use crate::{
    application::{authorization::require_role, dto::PrincipalDto, error::ApplicationResult},
    domain::{session::Session, user::Role},
};

impl AdminQueryService {
    pub async fn me(&self, session: Option<&Session>) -> ApplicationResult<PrincipalDto> {
        let principal = require_role(session, Role::Admin, self.clock.now())?;
        Ok(principal.into())
    }
}
