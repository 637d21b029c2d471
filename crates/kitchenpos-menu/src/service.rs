//! # Menu Service
//!
//! Orchestrates menu operations over the store traits.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MenuService::create                             │
//! │                                                                         │
//! │  1. price present and ≥ 0 ..................... InvalidArgument         │
//! │  2. menu group exists ......................... NotFound                │
//! │  3. at least one line ......................... InvalidArgument         │
//! │                                                                         │
//! │       ┌──────────────── tokio::join! ────────────────┐                  │
//! │       │ products.find_all_by_ids   profanity.check   │                  │
//! │       └──────────────────────┬───────────────────────┘                  │
//! │                              ▼                                           │
//! │  4. every product id resolves ................. InvalidArgument         │
//! │  5. every quantity ≥ 0 ........................ InvalidArgument         │
//! │  6. price ≤ Σ price × quantity ................ InvalidArgument         │
//! │  7. name present and not profane .............. InvalidArgument         │
//! │  8. assign id, save                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both reads run together but their results are judged in the order above,
//! so the first failing step is the one reported. Every operation finishes
//! all of its checks before its single write.
//!
//! ## Display State
//! ```text
//!              display (price ≤ live total)
//!   ┌────────┐ ──────────────────────────► ┌───────────┐
//!   │ hidden │                             │ displayed │
//!   └────────┘ ◄────────────────────────── └───────────┘
//!                  hide (always allowed)
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::MenuResult;
use crate::store::{MenuGroupStore, MenuStore, ProductStore, ProfanityChecker};
use kitchenpos_core::pricing::{ensure_within_total, live_total, resolve_lines, total_value};
use kitchenpos_core::validation::{validate_menu_name, validate_price};
use kitchenpos_core::{ChangeMenuPriceRequest, CoreError, CreateMenuRequest, Menu, Product};

/// Menu operations: create, change price, display, hide.
#[derive(Clone)]
pub struct MenuService {
    products: Arc<dyn ProductStore>,
    menu_groups: Arc<dyn MenuGroupStore>,
    menus: Arc<dyn MenuStore>,
    profanity: Arc<dyn ProfanityChecker>,
}

impl MenuService {
    pub fn new(
        products: Arc<dyn ProductStore>,
        menu_groups: Arc<dyn MenuGroupStore>,
        menus: Arc<dyn MenuStore>,
        profanity: Arc<dyn ProfanityChecker>,
    ) -> Self {
        MenuService {
            products,
            menu_groups,
            menus,
            profanity,
        }
    }

    // =========================================================================
    // Create
    // =========================================================================

    /// Validates a request and stores it as a new menu.
    pub async fn create(&self, request: CreateMenuRequest) -> MenuResult<Menu> {
        let price = validate_price(request.price)?;

        let menu_group = self
            .menu_groups
            .find_by_id(&request.menu_group_id)
            .await?
            .ok_or_else(|| CoreError::MenuGroupNotFound(request.menu_group_id.clone()))?;

        if request.menu_products.is_empty() {
            warn!(menu_group_id = %menu_group.id, "Rejected menu without products");
            return Err(CoreError::EmptyMenuProducts.into());
        }

        let product_ids: Vec<String> = request
            .menu_products
            .iter()
            .map(|line| line.product_id.clone())
            .collect();
        let name = validate_menu_name(request.name.as_deref());

        let name_check = async {
            match &name {
                Ok(name) => self.profanity.contains_profanity(name).await.map(Some),
                Err(_) => Ok(None),
            }
        };
        let (products, profane) = tokio::join!(
            self.products.find_all_by_ids(&product_ids),
            name_check
        );

        let products = products?;
        debug!(requested = product_ids.len(), found = products.len(), "Resolved menu products");

        let menu_products = resolve_lines(&request.menu_products, &products)?;
        let total = total_value(
            menu_products
                .iter()
                .map(|line| (line.product.price, line.quantity)),
        )?;
        if let Err(e) = ensure_within_total(price, total) {
            warn!(price = %price, total = %total, "Rejected overpriced menu");
            return Err(e.into());
        }

        let name = name?;
        if profane? == Some(true) {
            warn!(name = %name, "Rejected profane menu name");
            return Err(CoreError::ProfaneName(name.to_string()).into());
        }

        let menu = Menu {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price,
            menu_group,
            menu_products,
            displayed: request.displayed.unwrap_or(false),
        };

        let saved = self.menus.save(menu).await?;
        info!(
            id = %saved.id,
            name = %saved.name,
            price = %saved.price,
            displayed = saved.displayed,
            "Menu created"
        );

        Ok(saved)
    }

    // =========================================================================
    // Price Change
    // =========================================================================

    /// Sets a new price, checked against the stored lines at live prices.
    pub async fn change_price(
        &self,
        menu_id: &str,
        request: ChangeMenuPriceRequest,
    ) -> MenuResult<Menu> {
        let price = validate_price(request.price)?;
        let mut menu = self.find_menu(menu_id).await?;

        let products = self.live_products(&menu).await?;
        let total = live_total(&menu, &products)?;
        if let Err(e) = ensure_within_total(price, total) {
            warn!(id = %menu.id, price = %price, total = %total, "Rejected menu price change");
            return Err(e.into());
        }

        let previous = menu.price;
        menu.price = price;
        menu.refresh_products(&products);

        let saved = self.menus.save(menu).await?;
        info!(id = %saved.id, from = %previous, to = %saved.price, "Menu price changed");

        Ok(saved)
    }

    // =========================================================================
    // Display State
    // =========================================================================

    /// Shows a menu if its price does not exceed its live product value.
    ///
    /// An overpriced menu is a state conflict and stays as it was.
    pub async fn display(&self, menu_id: &str) -> MenuResult<Menu> {
        let mut menu = self.find_menu(menu_id).await?;

        let products = self.live_products(&menu).await?;
        let total = live_total(&menu, &products)?;
        if menu.price > total {
            warn!(id = %menu.id, price = %menu.price, total = %total, "Menu cannot be displayed");
            return Err(CoreError::MenuNotDisplayable {
                menu_id: menu.id,
                price: menu.price,
                total,
            }
            .into());
        }

        menu.displayed = true;
        menu.refresh_products(&products);

        let saved = self.menus.save(menu).await?;
        info!(id = %saved.id, "Menu displayed");

        Ok(saved)
    }

    /// Hides a menu. Always allowed.
    pub async fn hide(&self, menu_id: &str) -> MenuResult<Menu> {
        let mut menu = self.find_menu(menu_id).await?;
        menu.displayed = false;

        let saved = self.menus.save(menu).await?;
        info!(id = %saved.id, "Menu hidden");

        Ok(saved)
    }

    // =========================================================================
    // Queries and Reconciliation
    // =========================================================================

    /// Every stored menu with line snapshots at live product data.
    pub async fn find_all(&self) -> MenuResult<Vec<Menu>> {
        let mut menus = self.menus.find_all().await?;

        let ids = unique_product_ids(&menus);
        let products = self.products.find_all_by_ids(&ids).await?;
        for menu in &mut menus {
            menu.refresh_products(&products);
        }

        debug!(count = menus.len(), "Listed menus");
        Ok(menus)
    }

    /// Hides every displayed menu containing `product_id` that a product
    /// price change left overpriced. Returns the ids of the menus hidden.
    ///
    /// A displayed menu whose products can no longer all be resolved is
    /// hidden as well. Menus already hidden are not written.
    ///
    /// Menus are saved one at a time, not in one transaction. If a save
    /// fails, the menus saved before it stay hidden and the store error is
    /// returned without their ids. Calling again with the same product
    /// finishes the job, since hidden menus are no longer candidates.
    pub async fn hide_overpriced_menus(&self, product_id: &str) -> MenuResult<Vec<String>> {
        let candidates: Vec<Menu> = self
            .menus
            .find_all()
            .await?
            .into_iter()
            .filter(|menu| menu.displayed && menu.contains_product(product_id))
            .collect();

        if candidates.is_empty() {
            debug!(product_id = %product_id, "No displayed menus contain product");
            return Ok(Vec::new());
        }

        let ids = unique_product_ids(&candidates);
        let products = self.products.find_all_by_ids(&ids).await?;

        let mut overpriced = Vec::new();
        for menu in candidates {
            let exceeds = match live_total(&menu, &products) {
                Ok(total) => menu.price > total,
                Err(CoreError::ProductNotFound(missing)) => {
                    warn!(id = %menu.id, product_id = %missing, "Menu references a missing product");
                    true
                }
                Err(e) => return Err(e.into()),
            };
            if exceeds {
                overpriced.push(menu);
            }
        }

        let mut hidden = Vec::with_capacity(overpriced.len());
        for mut menu in overpriced {
            menu.displayed = false;
            menu.refresh_products(&products);
            match self.menus.save(menu).await {
                Ok(saved) => hidden.push(saved.id),
                Err(e) => {
                    warn!(
                        product_id = %product_id,
                        hidden = ?hidden,
                        error = %e,
                        "Stopped hiding overpriced menus"
                    );
                    return Err(e.into());
                }
            }
        }

        info!(product_id = %product_id, hidden = hidden.len(), "Hid overpriced menus");
        Ok(hidden)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn find_menu(&self, menu_id: &str) -> MenuResult<Menu> {
        let menu = self.menus.find_by_id(menu_id).await?;
        match menu {
            Some(menu) => Ok(menu),
            None => {
                warn!(id = %menu_id, "Menu not found");
                Err(CoreError::MenuNotFound(menu_id.to_string()).into())
            }
        }
    }

    /// Fresh product rows for a stored menu's lines.
    async fn live_products(&self, menu: &Menu) -> MenuResult<Vec<Product>> {
        let ids = unique_product_ids(std::slice::from_ref(menu));
        Ok(self.products.find_all_by_ids(&ids).await?)
    }
}

fn unique_product_ids(menus: &[Menu]) -> Vec<String> {
    menus
        .iter()
        .flat_map(|menu| menu.product_ids())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
