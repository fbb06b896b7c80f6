use super::NewsCommandService;
use crate::{
    application::{
        authorization::require_role,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::NewsId, session::Session, user::Role},
};

pub struct DeleteNewsCommand {
    pub id: i64,
}

impl NewsCommandService {
    pub async fn delete_news(
        &self,
        session: Option<&Session>,
        command: DeleteNewsCommand,
    ) -> ApplicationResult<()> {
        require_role(session, Role::Admin, self.clock.now())?;

        let id = NewsId::new(command.id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("news not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(news_id = command.id, "news deleted");
        Ok(())
    }
}
