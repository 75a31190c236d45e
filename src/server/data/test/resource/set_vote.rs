use super::*;
use crate::server::model::vote::VoteTally;

/// Tests that up and down votes are mutually exclusive.
///
/// Expected: Ok with one down vote after voting up then down, and a score of -1
#[tokio::test]
async fn up_and_down_are_exclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;
    let resource = ResourceFactory::new(db, "CSE110").build().await?;

    let repo = ResourceRepository::new(db);
    repo.set_vote(resource.id, voter.id, true).await?;
    repo.set_vote(resource.id, voter.id, false).await?;

    let votes = repo.get_votes(&[resource.id]).await?;
    let tally = VoteTally::from_votes(
        votes.get(&resource.id).cloned().unwrap_or_default(),
        Some(voter.id),
    );

    assert_eq!(tally.positive, 0);
    assert_eq!(tally.negative, 1);
    assert_eq!(tally.score(), -1);
    assert_eq!(tally.viewer, Some(false));

    Ok(())
}

/// Tests clearing a vote.
///
/// Expected: Ok with no votes recorded
#[tokio::test]
async fn clears_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;
    let resource = ResourceFactory::new(db, "CSE110").build().await?;

    let repo = ResourceRepository::new(db);
    repo.set_vote(resource.id, voter.id, true).await?;
    repo.clear_vote(resource.id, voter.id).await?;

    assert!(repo.get_votes(&[resource.id]).await?.is_empty());

    Ok(())
}
