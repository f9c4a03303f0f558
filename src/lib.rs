//! Conversion between Chinese regnal-era dates and civil (Julian/Gregorian)
//! dates for the 漢, 三國 and mid-唐 periods.
//!
//! ```no_run
//! use era_convert::{CivilDate, Converter, Registry};
//!
//! let registry = Registry::new()?;
//! let converter = Converter::new(&registry);
//! assert_eq!(
//!     converter.to_date_str("漢平帝元始元年正月朔")?,
//!     CivilDate::new(1, 2, 12)
//! );
//! for rendering in converter.from_date(CivilDate::new(237, 4, 13)) {
//!     println!("{rendering}");
//! }
//! # Ok::<(), era_convert::Error>(())
//! ```

pub mod civil;
pub mod convert;
mod data;
pub mod error;
pub mod mention;
pub mod numeral;
pub mod parser;
pub mod regime;
pub mod registry;
pub mod sanity;
pub mod scanner;
pub mod sexagenary;
pub mod table;

pub use civil::{CivilCalendar, CivilDate, Hybrid};
pub use convert::{Converter, DaySuggestions};
pub use error::{Error, Result};
pub use mention::{Mention, MentionFinder};
pub use parser::ChineseDate;
pub use registry::{EraSegment, Registry};
pub use sanity::{TableCheck, sanity_check};
pub use sexagenary::Sexagenary;
