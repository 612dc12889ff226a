pub mod validate;

use sea_orm::DatabaseConnection;

use crate::{
    model::team::CreateTeamDto,
    server::{data::team::TeamRepository, error::team::TeamError, error::Error},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates the draft against the composition rules and persists it
    /// atomically. Nothing is written when validation fails.
    pub async fn create_team(
        &self,
        user_id: i32,
        draft: &CreateTeamDto,
    ) -> Result<entity::fantasy_team::Model, Error> {
        validate::validate_composition(draft)?;

        let repository = TeamRepository::new(self.db);
        let team = repository.create(user_id, draft).await?;

        tracing::info!(
            "User {} created team {} for match {}",
            user_id,
            team.id,
            team.match_id
        );

        Ok(team)
    }

    /// Fetches one team with its player rows, enforcing ownership.
    pub async fn get_team_detail(
        &self,
        user_id: i32,
        team_id: i32,
    ) -> Result<
        (
            entity::fantasy_team::Model,
            Vec<entity::team_player::Model>,
        ),
        Error,
    > {
        let repository = TeamRepository::new(self.db);
        let team = self.get_owned_team(&repository, user_id, team_id).await?;
        let players = repository.get_players(team.id).await?;

        Ok((team, players))
    }

    pub async fn user_teams(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::fantasy_team::Model>, Error> {
        let repository = TeamRepository::new(self.db);

        Ok(repository.get_by_user(user_id).await?)
    }

    pub async fn delete_team(&self, user_id: i32, team_id: i32) -> Result<(), Error> {
        let repository = TeamRepository::new(self.db);
        let team = self.get_owned_team(&repository, user_id, team_id).await?;

        repository.delete(team).await?;

        Ok(())
    }

    async fn get_owned_team(
        &self,
        repository: &TeamRepository<'_>,
        user_id: i32,
        team_id: i32,
    ) -> Result<entity::fantasy_team::Model, Error> {
        let team = repository
            .get_by_id(team_id)
            .await?
            .ok_or(TeamError::NotFound)?;
        if team.user_id != user_id {
            return Err(TeamError::NotOwner.into());
        }

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::team::TeamPlayerDto, server::error::team::TeamError};
    use crease_test_utils::prelude::*;

    fn valid_draft() -> CreateTeamDto {
        let players = factory::default_player_ids()
            .into_iter()
            .map(|id| TeamPlayerDto {
                player_name: format!("Player {id}"),
                player_id: id,
                player_role: None,
                squad_name: None,
            })
            .collect();

        CreateTeamDto {
            match_id: "match-1".to_string(),
            name: "My XI".to_string(),
            captain_id: "p1".to_string(),
            vice_captain_id: "p2".to_string(),
            players,
        }
    }

    mod create_team_tests {
        use super::*;

        /// Expect Ok with the persisted team for a valid draft.
        #[tokio::test]
        async fn creates_valid_team() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let service = TeamService::new(&setup.db);

            let team = service.create_team(7, &valid_draft()).await.unwrap();

            assert_eq!(team.user_id, 7);
            assert_eq!(team.name, "My XI");
        }

        /// Expect the validation error and no persisted rows for a bad draft.
        #[tokio::test]
        async fn rejects_invalid_draft_without_writing() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let service = TeamService::new(&setup.db);
            let mut draft = valid_draft();
            draft.vice_captain_id = "p1".to_string();

            let result = service.create_team(7, &draft).await;

            assert!(matches!(
                result,
                Err(Error::TeamError(TeamError::CaptainIsViceCaptain))
            ));
            assert!(service.user_teams(7).await.unwrap().is_empty());
        }
    }

    mod delete_team_tests {
        use super::*;

        /// Expect NotOwner when deleting another user's team.
        #[tokio::test]
        async fn rejects_foreign_team() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let service = TeamService::new(&setup.db);
            let team = service.create_team(1, &valid_draft()).await.unwrap();

            let result = service.delete_team(2, team.id).await;

            assert!(matches!(result, Err(Error::TeamError(TeamError::NotOwner))));
        }

        /// Expect NotFound for a team id that does not exist.
        #[tokio::test]
        async fn rejects_missing_team() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let service = TeamService::new(&setup.db);

            let result = service.delete_team(1, 999).await;

            assert!(matches!(result, Err(Error::TeamError(TeamError::NotFound))));
        }
    }
}
