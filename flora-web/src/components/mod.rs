pub mod admin_sidebar;
pub mod blog_card;
pub mod category_dropdown;
pub mod daisy_ui;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod pagination;
pub mod product_card;
pub mod search_bar;

pub use admin_sidebar::AdminSidebar;
pub use blog_card::{BlogCard, BlogCardProps};
pub use category_dropdown::CategoryDropdown;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use header::Header;
pub use pagination::{ListingKind, Pagination};
pub use product_card::{ProductCard, ProductCardProps, ProductSkeletonCard};
pub use search_bar::{SearchBar, SearchResults};
