//! Built-in admission stages.

pub mod cook_time;
pub mod entry_type;
pub mod required_items;
pub mod unique_name;

pub use cook_time::CookTimeStage;
pub use entry_type::EntryTypeStage;
pub use required_items::RequiredItemsStage;
pub use unique_name::UniqueNameStage;
