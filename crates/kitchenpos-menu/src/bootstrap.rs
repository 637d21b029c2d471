//! # Service Wiring
//!
//! Builds a ready [`MenuService`] from a [`MenuConfig`]:
//!
//! ```text
//! MenuConfig ──► Database::new (pool + migrations)
//!            └─► profanity checker (Purgomalum or banned words)
//!                        │
//!                        ▼
//!            MenuService { products, menu_groups, menus, profanity }
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, MenuConfig, ProfanityBackend, ProfanitySettings};
use crate::error::{StoreError, StoreResult};
use crate::profanity::{BannedWordsChecker, PurgomalumClient};
use crate::service::MenuService;
use crate::store::ProfanityChecker;
use kitchenpos_db::{Database, DbConfig, DbError};

/// Anything that stops the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to create data directory: {0}")]
    Io(#[from] std::io::Error),
}

/// A connected database and the service running on it.
#[derive(Clone)]
pub struct MenuRuntime {
    pub db: Database,
    pub service: MenuService,
}

/// Connects the configured database and wires the service over it.
pub async fn connect(config: &MenuConfig) -> Result<MenuRuntime, StartupError> {
    config.validate()?;

    let db_config =
        DbConfig::for_path(&config.database.path).max_connections(config.database.max_connections);
    if !db_config.is_in_memory() {
        if let Some(parent) = config.database.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = Database::new(db_config).await?;
    let profanity = profanity_checker(&config.profanity)?;
    let service = sqlite_service(&db, profanity);

    info!(
        db = %config.database.path.display(),
        profanity = %config.profanity.backend,
        "Menu service ready"
    );

    Ok(MenuRuntime { db, service })
}

/// Builds the configured profanity checker.
pub fn profanity_checker(settings: &ProfanitySettings) -> StoreResult<Arc<dyn ProfanityChecker>> {
    match settings.backend {
        ProfanityBackend::Purgomalum => Ok(Arc::new(PurgomalumClient::new(
            &settings.url,
            settings.timeout(),
        )?)),
        ProfanityBackend::BannedWords => {
            Ok(Arc::new(BannedWordsChecker::new(&settings.banned_words)))
        }
    }
}

/// A service over the SQLite repositories of `db`.
pub fn sqlite_service(db: &Database, profanity: Arc<dyn ProfanityChecker>) -> MenuService {
    MenuService::new(
        Arc::new(db.products()),
        Arc::new(db.menu_groups()),
        Arc::new(db.menus()),
        profanity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchenpos_core::{
        ChangeMenuPriceRequest, CreateMenuRequest, ErrorKind, MenuGroup, MenuProductRequest,
        Money, Product,
    };
    use std::path::PathBuf;

    fn offline_config() -> MenuConfig {
        let mut config = MenuConfig::default();
        config.database.path = PathBuf::from(":memory:");
        config.profanity.backend = ProfanityBackend::BannedWords;
        config.profanity.banned_words = vec!["darn".to_string()];
        config
    }

    #[tokio::test]
    async fn test_service_over_sqlite() {
        let runtime = connect(&offline_config()).await.unwrap();
        let db = &runtime.db;

        let group = db.menu_groups().save(&MenuGroup::new("Two-item set")).await.unwrap();
        let chicken = db
            .products()
            .save(&Product::new("Fried chicken", Money::new(15_000)))
            .await
            .unwrap();
        let pasta = db
            .products()
            .save(&Product::new("Cream pasta", Money::new(20_000)))
            .await
            .unwrap();

        let menu = runtime
            .service
            .create(CreateMenuRequest {
                name: Some("Chicken and pasta".to_string()),
                price: Some(Money::new(30_000)),
                menu_group_id: group.id.clone(),
                menu_products: vec![
                    MenuProductRequest::new(chicken.id.clone(), 1),
                    MenuProductRequest::new(pasta.id.clone(), 1),
                ],
                displayed: None,
            })
            .await
            .unwrap();

        let shown = runtime.service.display(&menu.id).await.unwrap();
        assert!(shown.displayed);

        let err = runtime
            .service
            .change_price(&menu.id, ChangeMenuPriceRequest::new(Money::new(36_000)))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let mut cheaper = pasta.clone();
        cheaper.price = Money::new(10_000);
        db.products().save(&cheaper).await.unwrap();

        let hidden = runtime.service.hide_overpriced_menus(&pasta.id).await.unwrap();
        assert_eq!(hidden, vec![menu.id.clone()]);

        let stored = db.menus().get_by_id(&menu.id).await.unwrap().unwrap();
        assert!(!stored.displayed);
        assert_eq!(stored.price, Money::new(30_000));
        assert_eq!(stored.menu_products[1].product.price, Money::new(10_000));
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_connecting() {
        let mut config = offline_config();
        config.profanity.timeout_secs = 0;

        let err = connect(&config).await.err().unwrap();
        assert!(matches!(err, StartupError::Config(_)));
    }

    #[test]
    fn test_profanity_checker_selection() {
        let settings = ProfanitySettings::default();
        assert!(profanity_checker(&settings).is_ok());

        let settings = ProfanitySettings {
            url: "not a url".to_string(),
            ..ProfanitySettings::default()
        };
        assert!(profanity_checker(&settings).is_err());
    }
}
