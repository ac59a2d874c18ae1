//! View Models
//!
//! Presentation details of core types.

use deck_core::CardColor;

/// Background class for a card color
pub fn color_class(color: CardColor) -> &'static str {
    match color {
        CardColor::Red => "bg-red-600",
        CardColor::Blue => "bg-blue-600",
        CardColor::Green => "bg-green-600",
        CardColor::Yellow => "bg-yellow-600",
        CardColor::Purple => "bg-purple-600",
        CardColor::Pink => "bg-pink-600",
        CardColor::Indigo => "bg-indigo-600",
        CardColor::Gray => "bg-gray-600",
    }
}
