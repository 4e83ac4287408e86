//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let person = factory::create_person(&db).await?;
//!
//! let custom = factory::person::PersonFactory::new(&db)
//!     .name("Ada Lovelace")
//!     .number("39-44-5323523")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod person;

pub use person::create_person;
