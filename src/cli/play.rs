use crate::{
    Res,
    catalog::CatalogEntity,
    cli::search,
    playback::{PlayResult, PlaybackPipeline},
    service::CatalogService,
    session::Session,
    success, utils, warning,
};

pub async fn play<S: CatalogService>(
    session: &Session<S>,
    pipeline: &PlaybackPipeline,
    entity: &CatalogEntity,
    shuffle: bool,
) -> Res<PlayResult> {
    let result = pipeline.play(entity, shuffle, session).await?;
    success!(
        "Finished {} ({} track{}{})",
        result.label,
        result.track_count,
        if result.track_count == 1 { "" } else { "s" },
        if result.shuffled { ", shuffled" } else { "" }
    );
    Ok(result)
}

pub async fn play_query<S: CatalogService>(
    session: &Session<S>,
    pipeline: &PlaybackPipeline,
    query: &str,
    pick: usize,
    shuffle: bool,
    max_results: u32,
) -> Res<()> {
    let results = search(session, query, max_results).await?;
    let entities = results.entities();

    match utils::select(&entities, pick) {
        Some(entity) => play(session, pipeline, entity, shuffle).await.map(|_| ()),
        None => {
            warning!("No entry numbered {} for '{}'", pick, query);
            Ok(())
        }
    }
}
