//! # Menu Pricing
//!
//! Pure price-consistency rules. A menu may never cost more than the value
//! of its parts:
//!
//! ```text
//! menu.price ≤ Σ (product.price × line.quantity)
//! ```
//!
//! Callers pass in the products they just read from the product store, so
//! every check here runs against live prices.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Menu, MenuProduct, MenuProductRequest, Product};
use crate::validation::validate_quantity;

/// Sums `price × quantity` over all lines with overflow checks.
///
/// ## Example
/// ```rust
/// use kitchenpos_core::money::Money;
/// use kitchenpos_core::pricing::total_value;
///
/// let total = total_value([(Money::new(15_000), 1), (Money::new(20_000), 1)]).unwrap();
/// assert_eq!(total, Money::new(35_000));
/// ```
pub fn total_value<I>(lines: I) -> CoreResult<Money>
where
    I: IntoIterator<Item = (Money, i64)>,
{
    lines.into_iter().try_fold(Money::zero(), |total, (price, quantity)| {
        price
            .checked_multiply_quantity(quantity)
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| overflow().into())
    })
}

/// Fails with `PriceExceedsProducts` when `price > total`. Equal is fine.
pub fn ensure_within_total(price: Money, total: Money) -> CoreResult<()> {
    if price > total {
        return Err(CoreError::PriceExceedsProducts { price, total });
    }
    Ok(())
}

/// Resolves requested lines against the products the store returned.
///
/// Every product id is checked first, then every quantity, so an unknown
/// product wins over a negative quantity on a later line.
pub fn resolve_lines(
    requests: &[MenuProductRequest],
    products: &[Product],
) -> CoreResult<Vec<MenuProduct>> {
    let by_id = index(products);

    let resolved = requests
        .iter()
        .map(|request| {
            by_id
                .get(request.product_id.as_str())
                .map(|product| MenuProduct::new((*product).clone(), request.quantity))
                .ok_or_else(|| CoreError::ProductNotFound(request.product_id.clone()))
        })
        .collect::<CoreResult<Vec<_>>>()?;

    for line in &resolved {
        validate_quantity(line.quantity)?;
    }

    Ok(resolved)
}

/// Value of a stored menu's lines at the given (live) product prices.
///
/// A line whose product is no longer in `products` fails with
/// `ProductNotFound`.
pub fn live_total(menu: &Menu, products: &[Product]) -> CoreResult<Money> {
    let by_id = index(products);

    let lines = menu
        .menu_products
        .iter()
        .map(|line| {
            by_id
                .get(line.product_id())
                .map(|product| (product.price, line.quantity))
                .ok_or_else(|| CoreError::ProductNotFound(line.product_id().to_string()))
        })
        .collect::<CoreResult<Vec<_>>>()?;

    total_value(lines)
}

fn index(products: &[Product]) -> HashMap<&str, &Product> {
    products.iter().map(|p| (p.id.as_str(), p)).collect()
}

fn overflow() -> ValidationError {
    ValidationError::OutOfRange {
        field: "menu product total".to_string(),
        min: 0,
        max: i64::MAX,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuGroup;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            price: Money::new(price),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![product("chicken", 15_000), product("pasta", 20_000)]
    }

    #[test]
    fn test_total_value() {
        let total = total_value([(Money::new(15_000), 2), (Money::new(20_000), 0)]).unwrap();
        assert_eq!(total, Money::new(30_000));
        assert_eq!(total_value(Vec::new()).unwrap(), Money::zero());
    }

    #[test]
    fn test_total_value_overflow_is_invalid_argument() {
        let err = total_value([(Money::new(i64::MAX), 1), (Money::new(1), 1)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_ensure_within_total() {
        assert!(ensure_within_total(Money::new(35_000), Money::new(35_000)).is_ok());
        assert!(ensure_within_total(Money::new(30_000), Money::new(35_000)).is_ok());
        assert_eq!(
            ensure_within_total(Money::new(36_000), Money::new(35_000)),
            Err(CoreError::PriceExceedsProducts {
                price: Money::new(36_000),
                total: Money::new(35_000),
            })
        );
    }

    #[test]
    fn test_resolve_lines_attaches_snapshots() {
        let requests = vec![
            MenuProductRequest::new("chicken", 1),
            MenuProductRequest::new("pasta", 2),
        ];

        let lines = resolve_lines(&requests, &catalog()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].product.price, Money::new(20_000));
        assert_eq!(lines[1].quantity, 2);
    }

    #[test]
    fn test_resolve_lines_unknown_product_before_negative_quantity() {
        let requests = vec![
            MenuProductRequest::new("chicken", -1),
            MenuProductRequest::new("salad", 1),
        ];

        let err = resolve_lines(&requests, &catalog()).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("salad".to_string()));
    }

    #[test]
    fn test_resolve_lines_negative_quantity() {
        let requests = vec![
            MenuProductRequest::new("chicken", -1),
            MenuProductRequest::new("pasta", 1),
        ];

        let err = resolve_lines(&requests, &catalog()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::MustNotBeNegative { .. })));
    }

    #[test]
    fn test_live_total_uses_given_prices() {
        let menu = Menu {
            id: "menu-1".to_string(),
            name: "Set".to_string(),
            price: Money::new(30_000),
            menu_group: MenuGroup {
                id: "g".to_string(),
                name: "g".to_string(),
            },
            menu_products: vec![
                MenuProduct::new(product("chicken", 15_000), 1),
                MenuProduct::new(product("pasta", 20_000), 1),
            ],
            displayed: false,
        };

        let cheaper = vec![product("chicken", 5_000), product("pasta", 20_000)];
        assert_eq!(live_total(&menu, &cheaper).unwrap(), Money::new(25_000));

        let missing = vec![product("chicken", 15_000)];
        assert_eq!(
            live_total(&menu, &missing),
            Err(CoreError::ProductNotFound("pasta".to_string()))
        );
    }
}
