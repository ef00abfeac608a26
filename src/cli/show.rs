use crate::{
    Res,
    catalog::{CatalogEntity, ExpandMode, SearchResultSet},
    info,
    service::CatalogService,
    session::Session,
};

/// Prints what an entity contains. Albums and artists return the listing so
/// its entries can be picked next; a track only prints its label.
pub async fn show<S: CatalogService>(
    session: &Session<S>,
    entity: &CatalogEntity,
) -> Res<Option<SearchResultSet>> {
    if let CatalogEntity::Track(track) = entity {
        println!("{}", track);
        return Ok(None);
    }

    let listing = entity.expand(session, ExpandMode::Browse).await?;
    match entity {
        CatalogEntity::Album(_) if entity.display_count() > 0 => {
            info!("{} ({} tracks)", entity, entity.display_count())
        }
        _ => info!("{}", entity),
    }
    listing.print();
    Ok(Some(listing))
}
