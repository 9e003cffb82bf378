//! Loading the collection of pinned (query, answer) records.
//!
//! Records live in a flat JSON array, by default in `pinned-memolearn.json` in
//! the working directory:
//!
//! ```json
//! [
//!   {
//!     "id": "1718000000000",
//!     "query": "what is a closure",
//!     "answer": "A function that captures its environment.",
//!     "pinnedAt": "2024-06-10T06:13:20.000Z"
//!   }
//! ]
//! ```
//!
//! The store is read-only here. A missing or unreadable file is treated as an
//! empty collection rather than an error, so matching against it simply
//! yields no results.
//!
//! ## Example
//!
//! ```rust,no_run
//! use memo_match::RecordStore;
//! use std::path::Path;
//!
//! let store = RecordStore::load(Path::new("pinned-memolearn.json"));
//! println!("{} pinned queries", store.len());
//! ```

pub mod records;
