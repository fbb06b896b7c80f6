use super::CategoryCommandService;
use crate::{
    application::{
        authorization::require_role,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryId, session::Session, user::Role},
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        session: Option<&Session>,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        require_role(session, Role::Admin, self.clock.now())?;

        let id = CategoryId::new(command.id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(category_id = command.id, "category deleted");
        Ok(())
    }
}
