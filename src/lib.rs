//! Cross-framework English reading level lookup.
//!
//! Maps a Lexile score or school grade onto Oxford Reading Tree, CEFR, the
//! Chinese national curriculum, RAZ, Heinemann and Cambridge exams, recommends
//! books for the resolved level, and estimates a Lexile score from a short
//! placement test.

pub mod assessment;
pub mod books;
pub mod config;
pub mod domain;
pub mod error;
pub mod logic;
pub mod lookup;
pub mod protocol;
pub mod registry;
pub mod routes;
pub mod seeds;
pub mod state;
pub mod telemetry;
pub mod ui_mode;
pub mod util;
pub mod validate;

pub use lookup::GradingTable;
pub use routes::build_router;
pub use state::AppState;
