pub use crate::ship::Entity as Ship;
