//! Reusable wallet widgets.

mod bottom_sheet;
mod button;
mod carousel;
mod input;
mod pin_pad;
mod segmented;
mod tilt_card;
mod toast;

pub use bottom_sheet::*;
pub use button::*;
pub use carousel::*;
pub use input::*;
pub use pin_pad::*;
pub use segmented::*;
pub use tilt_card::*;
pub use toast::*;
