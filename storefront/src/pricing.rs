//! Order pricing: the registered-buyer discount, coupons, and totals.
//!
//! Prices are whole rupees. Nothing here is stored — the cart and checkout
//! pages derive every figure from the cart lines on each render.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::consts::{
    COUPONS, DELIVERY_CHARGE, FREE_DELIVERY_THRESHOLD, PLATFORM_FEE, REGISTERED_PRICE_FACTOR,
};

/// A redeemable discount code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: &'static str,
    /// Percentage off the subtotal.
    pub percent: u32,
}

/// Look up a coupon code, case-insensitively. Unknown codes yield `None`
/// and leave pricing untouched.
#[must_use]
pub fn find_coupon(code: &str) -> Option<Coupon> {
    let code = code.trim();
    COUPONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|&(code, percent)| Coupon { code, percent })
}

/// Unit price after the registered-buyer discount, before coupon, platform,
/// and delivery adjustments.
#[must_use]
pub fn effective_unit_price(price: u32, registered: bool) -> u32 {
    if registered {
        round(f64::from(price) * REGISTERED_PRICE_FACTOR)
    } else {
        price
    }
}

/// The full price-details breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of list prices times quantity.
    pub mrp_total: u32,
    /// Sum of effective unit prices times quantity.
    pub subtotal: u32,
    /// `mrp_total - subtotal`: markdown plus registration discount.
    pub savings: u32,
    pub coupon_discount: u32,
    pub platform_fee: u32,
    pub delivery_charge: u32,
    /// `subtotal - coupon_discount + platform_fee + delivery_charge`.
    pub total: u32,
}

impl Totals {
    /// Price a cart for a buyer, with at most one coupon applied.
    #[must_use]
    pub fn compute(cart: &[CartItem], registered: bool, coupon: Option<Coupon>) -> Self {
        let subtotal: u32 = cart
            .iter()
            .map(|item| effective_unit_price(item.product.price, registered) * item.quantity)
            .sum();
        let mrp_total: u32 =
            cart.iter().map(|item| item.product.original_price * item.quantity).sum();

        let coupon_discount = coupon
            .map(|coupon| round(f64::from(subtotal) * f64::from(coupon.percent) / 100.0))
            .unwrap_or(0);
        let delivery_charge = if subtotal > FREE_DELIVERY_THRESHOLD { 0 } else { DELIVERY_CHARGE };

        Self {
            mrp_total,
            subtotal,
            savings: mrp_total.saturating_sub(subtotal),
            coupon_discount,
            platform_fee: PLATFORM_FEE,
            delivery_charge,
            total: subtotal - coupon_discount + PLATFORM_FEE + delivery_charge,
        }
    }
}

/// Round-half-up to a whole rupee.
fn round(amount: f64) -> u32 {
    let rounded = amount.round();
    if rounded <= 0.0 { 0 } else { rounded as u32 }
}
