//! services/status_service.rs
//! Cliente del store de "status checks" (SQLite vía sqlx).

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::models::status_model::{StatusCheck, StatusCheckDocument};

/// Límite de registros devuelto por `list_all` si no se pide otro.
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

#[derive(Clone, Debug)]
pub struct StatusService {
    db_pool: Pool<Sqlite>,
}

impl StatusService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        StatusService { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Fallo en migraciones de 'status_checks'")?;
        Ok(())
    }

    /// Un único INSERT; el timestamp se guarda como string ISO-8601.
    pub async fn insert(&self, record: &StatusCheck) -> Result<()> {
        let doc = StatusCheckDocument::from(record);

        sqlx::query(
            r#"
            INSERT INTO status_checks (id, client_name, timestamp)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(doc.id)
        .bind(doc.client_name)
        .bind(doc.timestamp)
        .execute(&self.db_pool)
        .await
        .context("Fallo al insertar status_check")?;

        Ok(())
    }

    /// Devuelve hasta `limit` registros.
    ///
    /// No hay ORDER BY: el orden es el que dé el store, no necesariamente
    /// cronológico. El rowid interno de SQLite no se selecciona.
    pub async fn list_all(&self, limit: u32) -> Result<Vec<StatusCheck>> {
        let docs = sqlx::query_as::<_, StatusCheckDocument>(
            r#"
            SELECT id, client_name, timestamp
            FROM status_checks
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al listar status_checks")?;

        docs.into_iter().map(StatusCheck::try_from).collect()
    }

    /// Cierra el pool. Se llama una vez, al apagar el servidor.
    pub async fn close(&self) {
        self.db_pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::memory_status_service;
    use actix_rt::test;

    #[test]
    async fn insert_then_list_round_trips() {
        let service = memory_status_service().await;
        let record = StatusCheck::new("portal".to_string());

        service.insert(&record).await.unwrap();
        let listed = service.list_all(DEFAULT_LIST_LIMIT).await.unwrap();

        assert_eq!(listed, vec![record]);
    }

    #[test]
    async fn list_respects_limit() {
        let service = memory_status_service().await;
        for i in 0..5 {
            service
                .insert(&StatusCheck::new(format!("cliente-{}", i)))
                .await
                .unwrap();
        }

        assert_eq!(service.list_all(3).await.unwrap().len(), 3);
        assert_eq!(service.list_all(DEFAULT_LIST_LIMIT).await.unwrap().len(), 5);
    }

    #[test]
    async fn duplicate_id_is_a_store_error() {
        let service = memory_status_service().await;
        let record = StatusCheck::new("portal".to_string());

        service.insert(&record).await.unwrap();
        let err = service.insert(&record).await.unwrap_err();
        assert!(err.to_string().contains("insertar"));
        assert_eq!(service.list_all(DEFAULT_LIST_LIMIT).await.unwrap().len(), 1);
    }

    #[test]
    async fn closed_pool_reports_errors() {
        let service = memory_status_service().await;
        service.close().await;

        assert!(service.list_all(DEFAULT_LIST_LIMIT).await.is_err());
    }
}
