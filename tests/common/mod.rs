#![allow(dead_code)]

//! Behaviour every `ThingRepository` must show, run against each implementation.

use thingstore::{ThingDraft, ThingId, ThingRepository, ThingRepositoryExt};

pub async fn saved_thing_is_found_by_shape_and_color<R: ThingRepository>(repo: &R) {
    let saved = repo.save(ThingDraft::new("circle", "red")).await.unwrap();

    let by_shape = repo.find_by_shape("circle").await.unwrap();
    assert!(by_shape.contains(&saved));

    let by_color = repo.find_by_color("red").await.unwrap();
    assert!(by_color.contains(&saved));

    assert!(repo.find_by_color("blue").await.unwrap().is_empty());
}

pub async fn unknown_id_is_absent<R: ThingRepository>(repo: &R) {
    assert_eq!(repo.find_by_id(9_999).await.unwrap(), None);
}

pub async fn deleted_thing_is_gone<R: ThingRepository>(repo: &R) {
    let saved = repo.save(ThingDraft::new("triangle", "green")).await.unwrap();
    assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved.clone()));

    assert!(repo.delete_by_id(saved.id).await.unwrap());
    assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
    assert!(repo.find_by_shape("triangle").await.unwrap().is_empty());
}

pub async fn deleting_unknown_id_is_a_noop<R: ThingRepository>(repo: &R) {
    repo.save(ThingDraft::new("circle", "red")).await.unwrap();

    assert!(!repo.delete_by_id(9_999).await.unwrap());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

pub async fn lookups_without_matches_are_empty<R: ThingRepository>(repo: &R) {
    assert!(repo.find_by_shape("").await.unwrap().is_empty());
    assert!(repo.find_by_color("").await.unwrap().is_empty());

    repo.save(ThingDraft::new("square", "yellow")).await.unwrap();
    assert!(repo.find_by_shape("").await.unwrap().is_empty());
    assert!(repo.find_by_shape("hexagon").await.unwrap().is_empty());
}

pub async fn lookups_are_exact_and_case_sensitive<R: ThingRepository>(repo: &R) {
    repo.save(ThingDraft::new("circle", "red")).await.unwrap();
    repo.save(ThingDraft::new("Circle", "Red")).await.unwrap();
    repo.save(ThingDraft::new("circles", "reddish")).await.unwrap();

    let circles = repo.find_by_shape("circle").await.unwrap();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].shape, "circle");

    let reds = repo.find_by_color("Red").await.unwrap();
    assert_eq!(reds.len(), 1);
    assert_eq!(reds[0].color, "Red");
}

pub async fn empty_strings_are_stored_and_matched<R: ThingRepository>(repo: &R) {
    let blank = repo.save(ThingDraft::new("", "")).await.unwrap();

    assert_eq!(repo.find_by_shape("").await.unwrap(), vec![blank.clone()]);
    assert_eq!(repo.find_by_color("").await.unwrap(), vec![blank]);
}

pub async fn save_with_id_updates_in_place<R: ThingRepository>(repo: &R) {
    let saved = repo.save(ThingDraft::new("circle", "red")).await.unwrap();

    let mut draft = ThingDraft::from(saved.clone());
    draft.color = "blue".to_string();
    let updated = repo.save(draft).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.color, "blue");
    assert_eq!(repo.find_all().await.unwrap(), vec![updated]);
    assert!(repo.find_by_color("red").await.unwrap().is_empty());
}

pub async fn save_with_unknown_id_inserts_it<R: ThingRepository>(repo: &R) {
    let saved = repo.save(ThingDraft::new("star", "gold").with_id(42)).await.unwrap();
    assert_eq!(saved.id, 42);
    assert_eq!(repo.find_by_id(42).await.unwrap(), Some(saved));

    let next = repo.save(ThingDraft::new("star", "silver")).await.unwrap();
    assert!(next.id > 42);
}

pub async fn assigned_ids_are_distinct<R: ThingRepository>(repo: &R) {
    let a = repo.save(ThingDraft::new("circle", "red")).await.unwrap();
    let b = repo.save(ThingDraft::new("circle", "red")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(repo.find_by_shape("circle").await.unwrap(), vec![a, b]);
}

pub async fn bulk_operations<R: ThingRepositoryExt>(repo: &R) {
    let saved = repo
        .save_all(vec![
            ThingDraft::new("circle", "red"),
            ThingDraft::new("square", "red"),
            ThingDraft::new("circle", "blue"),
        ])
        .await
        .unwrap();
    assert_eq!(saved.len(), 3);
    assert_eq!(repo.count().await.unwrap(), 3);

    let ids = [saved[2].id, 9_999, saved[0].id];
    let found = repo.find_all_by_id(&ids).await.unwrap();
    assert_eq!(found, vec![saved[0].clone(), saved[2].clone()]);

    assert!(repo.exists_by_id(saved[1].id).await.unwrap());
    assert!(!repo.exists_by_id(9_999).await.unwrap());

    assert!(repo.delete(&saved[1]).await.unwrap());
    assert!(!repo.delete(&saved[1]).await.unwrap());

    assert_eq!(repo.delete_all_by_id(&[saved[0].id, 9_999]).await.unwrap(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);

    assert_eq!(repo.delete_all().await.unwrap(), 1);
    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.delete_all().await.unwrap(), 0);
}

pub async fn failed_save_all_leaves_no_trace<R: ThingRepositoryExt>(repo: &R) {
    repo.save(ThingDraft::new("circle", "red").with_id(ThingId::MAX))
        .await
        .unwrap();

    // The first draft is fine; the second needs an id past the maximum
    let result = repo
        .save_all(vec![
            ThingDraft::new("square", "blue").with_id(5),
            ThingDraft::new("triangle", "green"),
        ])
        .await;
    assert!(result.is_err());

    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.find_by_id(5).await.unwrap(), None);
    assert!(repo.find_by_shape("square").await.unwrap().is_empty());
}

pub async fn long_id_lists_are_accepted<R: ThingRepositoryExt>(repo: &R) {
    let saved = repo
        .save_all(vec![
            ThingDraft::new("circle", "red"),
            ThingDraft::new("square", "red"),
            ThingDraft::new("circle", "blue").with_id(4_321),
        ])
        .await
        .unwrap();

    let ids: Vec<ThingId> = (1..=5_000).collect();
    assert_eq!(repo.find_all_by_id(&ids).await.unwrap(), saved);

    assert_eq!(repo.delete_all_by_id(&ids).await.unwrap(), 3);
    assert_eq!(repo.count().await.unwrap(), 0);
}
