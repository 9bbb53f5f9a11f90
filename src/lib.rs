//! secrets-to-env - Export CI job secrets as environment variables and a .env file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Inputs, subcommands, dispatch
//! │   └── output        # Error and summary lines
//! └── core/             # Core library components
//!     ├── config        # Step inputs → settings
//!     ├── secrets       # JSON secret set
//!     ├── filter        # include/exclude patterns
//!     ├── case          # case conversion modes
//!     ├── transform     # filter → prefix → convert
//!     ├── env           # env file output
//!     ├── inject        # main phase
//!     ├── cleanup       # post phase
//!     ├── lifecycle     # main/post dispatch
//!     └── host/         # CI host capabilities
//!         ├── mod       # Host trait
//!         ├── actions   # GitHub Actions runner
//!         └── memory    # in-memory host
//! ```
//!
//! # Lifecycle
//!
//! The runner calls the binary as a step and again as the step's post hook.
//! The first call exports the secrets and writes the env file; the second
//! deletes the file.

pub mod cli;
pub mod core;
pub mod error;
