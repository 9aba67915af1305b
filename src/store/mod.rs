use crate::utils::error::Result;
use mongodb::bson::{doc, Document};
use mongodb::Client;

/// Insert a user record into the document store at `uri`.
///
/// A fresh connection is opened and shut down per call; no pool is kept,
/// since the target store URL arrives with each request. Falls back to the
/// `test` database when the URI names none.
pub async fn insert_user(uri: &str, login: &str, password: &str) -> Result<()> {
    let client = Client::with_uri_str(uri).await?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database("test"));

    let users = database.collection::<Document>("users");
    users
        .insert_one(doc! { "login": login, "password": password })
        .await?;

    client.shutdown().await;
    Ok(())
}
