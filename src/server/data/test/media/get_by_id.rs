use super::*;
use entity::prelude::{MediaFeature, MediaSection};
use test_utils::factory::media::MediaSectionFactory;

/// Tests loading a media section with ordered bullets and layout.
///
/// Verifies that bullets come back by sort order regardless of insertion order, and
/// that the alignment, media position and background style are split out as layout.
///
/// Expected: Ok(Some) with bullets [Fast, Secure, Simple] and layout populated
#[tokio::test]
async fn loads_section_with_ordered_features() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MediaSection)
        .with_table(MediaFeature)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let media = MediaSectionFactory::new(db)
        .heading("Ship faster")
        .layout("left", "right", "gradient")
        .spacing("lg")
        .build()
        .await?;
    factory::create_media_feature(db, media.id, "Simple", 3).await?;
    factory::create_media_feature(db, media.id, "Fast", 1).await?;
    factory::create_media_feature(db, media.id, "Secure", 2).await?;

    let repo = MediaSectionRepository::new(db);
    let result = repo.get_by_id(media.id).await?;

    assert!(result.is_some());
    let (section, layout) = result.unwrap();
    assert_eq!(section.heading, "Ship faster");
    let labels: Vec<&str> = section.features.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Fast", "Secure", "Simple"]);
    assert_eq!(layout.alignment.as_deref(), Some("left"));
    assert_eq!(layout.media_position.as_deref(), Some("right"));
    assert_eq!(layout.background_style.as_deref(), Some("gradient"));
    assert_eq!(layout.spacing.as_deref(), Some("lg"));

    Ok(())
}

/// Tests loading a media section that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MediaSection)
        .with_table(MediaFeature)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MediaSectionRepository::new(db);
    let result = repo.get_by_id(404).await?;

    assert!(result.is_none());

    Ok(())
}
