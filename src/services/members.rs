//! Members service

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All members in insertion order
    pub async fn list(&self) -> Vec<Member> {
        self.repository.members.list(&[], None).await
    }

    pub async fn count(&self) -> usize {
        self.repository.members.count().await
    }

    pub async fn create(&self, data: CreateMember) -> AppResult<Member> {
        let member = self.repository.members.create(data).await?;
        let total = self.count().await;
        tracing::info!(member_id = member.id, total, "Member created");
        Ok(member)
    }

    pub async fn update(&self, id: u64, data: UpdateMember) -> AppResult<Member> {
        let member = self.repository.members.update(id, data).await?;
        tracing::info!(member_id = id, "Member updated");
        Ok(member)
    }

    pub async fn delete(&self, id: u64) -> AppResult<()> {
        self.repository.members.delete(id).await?;
        tracing::info!(member_id = id, "Member deleted");
        Ok(())
    }
}
