use crate::{
    Res,
    catalog::{self, SearchResultSet},
    service::CatalogService,
    session::Session,
};

pub async fn search<S: CatalogService>(
    session: &Session<S>,
    query: &str,
    max_results: u32,
) -> Res<SearchResultSet> {
    let results = catalog::search(query, session, max_results).await?;
    results.print();
    Ok(results)
}
