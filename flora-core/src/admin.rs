//! In-memory admin CRUD over catalog records.
//!
//! Edits live only as long as the store; nothing is written back to the
//! bundled catalog.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{
    Account, Blog, BlogStatus, Catalog, Category, EntityRef, PLACEHOLDER_IMAGE, Product,
};
use crate::filter::PriceRange;
use crate::format::product_code_for;

static PRODUCT_CODE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Z]{2,4}-?\d{3,6}$").ok());
static USERNAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[a-z0-9_]{3,32}$").ok());

const MIN_PASSWORD_LEN: usize = 6;

#[must_use]
pub fn is_product_code_valid(code: &str) -> bool {
    PRODUCT_CODE.as_ref().is_some_and(|re| re.is_match(code))
}

#[must_use]
pub fn is_username_valid(username: &str) -> bool {
    USERNAME.as_ref().is_some_and(|re| re.is_match(username))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("Không tìm thấy bản ghi #{0}")]
    NotFound(u64),
    #[error("Vui lòng nhập {0}")]
    Required(&'static str),
    #[error("Giá phải là số nguyên dương")]
    InvalidPrice,
    #[error("Mã sản phẩm không hợp lệ: {0}")]
    InvalidProductCode(String),
    #[error("Tên đăng nhập phải gồm 3-32 ký tự a-z, 0-9 hoặc _")]
    InvalidUsername,
    #[error("Mật khẩu phải có ít nhất 6 ký tự")]
    WeakPassword,
    #[error("Tên đăng nhập {0} đã tồn tại")]
    DuplicateUsername(String),
    #[error("Không thể xóa tài khoản đang đăng nhập!")]
    SelfDelete,
    #[error("Phải có ít nhất 1 tài khoản admin!")]
    LastAccount,
}

/// Anything the admin store can hold: a cloneable row with a numeric id.
pub trait Record: Clone {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

impl Record for Product {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Record for Blog {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Record for Account {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Ordered list of records with id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStore<T: Record> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Default for AdminStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Record> AdminStore<T> {
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append `record` under the next free id and return that id.
    pub fn create(&mut self, mut record: T) -> u64 {
        let id = self.next_id;
        record.set_id(id);
        self.records.push(record);
        self.next_id += 1;
        log::debug!("admin store: created #{id}");
        id
    }

    /// Replace the record stored under `id`. The stored id always wins.
    ///
    /// # Errors
    ///
    /// [`AdminError::NotFound`] when no record has `id`.
    pub fn update(&mut self, id: u64, mut record: T) -> Result<&T, AdminError> {
        let slot = self
            .records
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(AdminError::NotFound(id))?;
        record.set_id(id);
        *slot = record;
        log::debug!("admin store: updated #{id}");
        Ok(&*slot)
    }

    /// # Errors
    ///
    /// [`AdminError::NotFound`] when no record has `id`.
    pub fn delete(&mut self, id: u64) -> Result<T, AdminError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(AdminError::NotFound(id))?;
        log::debug!("admin store: deleted #{id}");
        Ok(self.records.remove(index))
    }
}

impl AdminStore<Account> {
    /// Delete an account unless it is the one logged in or the last one left.
    ///
    /// # Errors
    ///
    /// [`AdminError::SelfDelete`], [`AdminError::LastAccount`] or
    /// [`AdminError::NotFound`].
    pub fn delete_account(&mut self, id: u64, current_username: &str) -> Result<Account, AdminError> {
        let account = self.get(id).ok_or(AdminError::NotFound(id))?;
        if account.username == current_username {
            return Err(AdminError::SelfDelete);
        }
        if self.len() <= 1 {
            return Err(AdminError::LastAccount);
        }
        self.delete(id)
    }

    fn username_taken(&self, username: &str, except: Option<u64>) -> bool {
        self.records
            .iter()
            .any(|account| account.username == username && Some(account.id) != except)
    }
}

fn required(value: &str, field: &'static str) -> Result<String, AdminError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AdminError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Raw product form fields as typed into the modal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub product_code: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
    pub image_url: String,
}

impl ProductForm {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_code: product.product_code.clone().unwrap_or_default(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            category_id: product
                .category
                .as_ref()
                .map(|category| category.id.to_string())
                .unwrap_or_default(),
            image_url: product.image_url.clone(),
        }
    }

    /// Build the product stored under `id`.
    ///
    /// # Errors
    ///
    /// Fails on a missing name, a non-positive or non-numeric price, or a
    /// product code that does not look like `FL-0001`.
    pub fn validate(&self, id: u64, categories: &[Category]) -> Result<Product, AdminError> {
        let name = required(&self.name, "tên sản phẩm")?;
        let price = self
            .price
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|price| *price > 0)
            .ok_or(AdminError::InvalidPrice)?;
        let product_code = match optional(&self.product_code) {
            Some(code) if is_product_code_valid(&code) => code,
            Some(code) => return Err(AdminError::InvalidProductCode(code)),
            None => product_code_for(id),
        };
        let category = self
            .category_id
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(|category_id| categories.iter().find(|c| c.id == category_id))
            .map(|category| EntityRef {
                id: category.id,
                name: category.name.clone(),
            });

        Ok(Product {
            id,
            name,
            price,
            image_url: optional(&self.image_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            description: optional(&self.description),
            product_code: Some(product_code),
            category,
            collection: None,
        })
    }

    /// Apply the form over `existing`, keeping fields the form does not edit.
    ///
    /// # Errors
    ///
    /// Same as [`ProductForm::validate`].
    pub fn merge_into(&self, existing: &Product, categories: &[Category]) -> Result<Product, AdminError> {
        let mut product = self.validate(existing.id, categories)?;
        product.collection.clone_from(&existing.collection);
        Ok(product)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogForm {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    #[serde(default)]
    pub status: BlogStatus,
}

impl BlogForm {
    #[must_use]
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            summary: blog.summary.clone().unwrap_or_default(),
            content: blog.content.clone(),
            image_url: blog.image_url.clone(),
            status: blog.status,
        }
    }

    /// Build a new post written by `author` at `timestamp`.
    ///
    /// # Errors
    ///
    /// [`AdminError::Required`] when the title or content is blank.
    pub fn validate(&self, id: u64, author: &str, timestamp: &str) -> Result<Blog, AdminError> {
        let title = required(&self.title, "tiêu đề")?;
        let content = required(&self.content, "nội dung")?;
        Ok(Blog {
            id,
            title,
            summary: optional(&self.summary),
            content,
            image_url: optional(&self.image_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            author_username: optional(author),
            created_at: timestamp.to_string(),
            updated_at: Some(timestamp.to_string()),
            status: self.status,
        })
    }

    /// Apply the form over `existing`, keeping its author and creation time.
    ///
    /// # Errors
    ///
    /// Same as [`BlogForm::validate`].
    pub fn merge_into(&self, existing: &Blog, timestamp: &str) -> Result<Blog, AdminError> {
        let mut blog = self.validate(existing.id, "", timestamp)?;
        blog.author_username.clone_from(&existing.author_username);
        blog.created_at.clone_from(&existing.created_at);
        Ok(blog)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountForm {
    pub username: String,
    pub password: String,
}

impl AccountForm {
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            password: String::new(),
        }
    }

    /// Validate a new account. The password is checked but never stored.
    ///
    /// # Errors
    ///
    /// Fails on a malformed or taken username, or a short password.
    pub fn validate_create(&self, store: &AdminStore<Account>, created_at: &str) -> Result<Account, AdminError> {
        let username = self.checked_username(store, None)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AdminError::WeakPassword);
        }
        Ok(Account {
            id: store.next_id(),
            username,
            created_at: created_at.to_string(),
        })
    }

    /// Validate an edit. A blank password leaves the current one alone.
    ///
    /// # Errors
    ///
    /// Same as [`AccountForm::validate_create`], plus [`AdminError::NotFound`].
    pub fn validate_update(&self, store: &AdminStore<Account>, id: u64) -> Result<Account, AdminError> {
        let existing = store.get(id).ok_or(AdminError::NotFound(id))?;
        let username = self.checked_username(store, Some(id))?;
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AdminError::WeakPassword);
        }
        Ok(Account {
            username,
            ..existing.clone()
        })
    }

    fn checked_username(&self, store: &AdminStore<Account>, except: Option<u64>) -> Result<String, AdminError> {
        let username = self.username.trim();
        if !is_username_valid(username) {
            return Err(AdminError::InvalidUsername);
        }
        if store.username_taken(username, except) {
            return Err(AdminError::DuplicateUsername(username.to_string()));
        }
        Ok(username.to_string())
    }
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub products: usize,
    pub blogs: usize,
    pub categories: usize,
    pub accounts: usize,
    pub average_price: Option<i64>,
    /// Product counts per price preset, in [`PriceRange::ALL`] order.
    pub price_buckets: [(PriceRange, usize); 4],
}

impl DashboardStats {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, accounts: &AdminStore<Account>) -> Self {
        Self::from_parts(
            &catalog.products,
            catalog.blogs.len(),
            catalog.categories.len(),
            accounts.len(),
        )
    }

    #[must_use]
    pub fn from_parts(products: &[Product], blogs: usize, categories: usize, accounts: usize) -> Self {
        let mut price_buckets = PriceRange::ALL.map(|range| (range, 0));
        for product in products {
            let bucket = PriceRange::bucket_of(product.price);
            if let Some(slot) = price_buckets.iter_mut().find(|(range, _)| *range == bucket) {
                slot.1 += 1;
            }
        }
        // Summed in i128 so one oversized price cannot overflow the total.
        let average_price = i128::try_from(products.len())
            .ok()
            .filter(|count| *count > 0)
            .and_then(|count| {
                let total: i128 = products.iter().map(|p| i128::from(p.price)).sum();
                i64::try_from(total / count).ok()
            });

        Self {
            products: products.len(),
            blogs,
            categories,
            accounts,
            average_price,
            price_buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> AdminStore<Account> {
        AdminStore::new(Catalog::bundled().accounts.clone())
    }

    #[test]
    fn store_assigns_sequential_ids() {
        let mut store = AdminStore::new(Catalog::bundled().products.clone());
        assert_eq!(store.next_id(), 25);
        let form = ProductForm {
            name: "Hoa Thử".into(),
            price: "100000".into(),
            ..ProductForm::default()
        };
        let product = form.validate(store.next_id(), &[]).unwrap();
        let id = store.create(product);
        assert_eq!(id, 25);
        assert_eq!(store.get(25).unwrap().product_code.as_deref(), Some("FL-0025"));
        assert_eq!(store.len(), 25);
    }

    #[test]
    fn update_and_delete_unknown_ids_fail() {
        let mut store = AdminStore::new(Catalog::bundled().blogs.clone());
        let blog = store.get(1).unwrap().clone();
        assert_eq!(store.update(99, blog.clone()), Err(AdminError::NotFound(99)));
        assert_eq!(store.delete(99), Err(AdminError::NotFound(99)));
        assert_eq!(store.delete(1).unwrap().id, 1);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn product_form_rules() {
        let categories = &Catalog::bundled().categories;
        let mut form = ProductForm {
            name: "  ".into(),
            price: "5".into(),
            ..ProductForm::default()
        };
        assert_eq!(form.validate(1, categories), Err(AdminError::Required("tên sản phẩm")));

        form.name = "Bó Cúc".into();
        form.price = "-3".into();
        assert_eq!(form.validate(1, categories), Err(AdminError::InvalidPrice));
        form.price = "abc".into();
        assert_eq!(form.validate(1, categories), Err(AdminError::InvalidPrice));

        form.price = "250000".into();
        form.product_code = "fl1".into();
        assert!(matches!(
            form.validate(1, categories),
            Err(AdminError::InvalidProductCode(_))
        ));

        form.product_code = "FL001".into();
        form.category_id = "3".into();
        let product = form.validate(7, categories).unwrap();
        assert_eq!(product.product_code.as_deref(), Some("FL001"));
        assert_eq!(product.category.unwrap().name, "Hoa Cưới");
        assert_eq!(product.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn product_edit_keeps_collection() {
        let catalog = Catalog::bundled();
        let existing = catalog.product(4).unwrap();
        let mut form = ProductForm::from_product(existing);
        form.price = "600000".into();
        let updated = form.merge_into(existing, &catalog.categories).unwrap();
        assert_eq!(updated.price, 600_000);
        assert_eq!(updated.collection, existing.collection);
        assert_eq!(updated.id, 4);
    }

    #[test]
    fn blog_form_defaults_author_and_keeps_history() {
        let form = BlogForm {
            title: "Hoa tháng mười".into(),
            content: "Nội dung".into(),
            ..BlogForm::default()
        };
        let blog = form.validate(7, "admin", "2025-10-01T08:00:00Z").unwrap();
        assert_eq!(blog.author_username.as_deref(), Some("admin"));
        assert!(blog.summary.is_none());

        let edited = BlogForm {
            title: "Hoa tháng mười một".into(),
            ..BlogForm::from_blog(&blog)
        }
        .merge_into(&blog, "2025-11-01T08:00:00Z")
        .unwrap();
        assert_eq!(edited.created_at, "2025-10-01T08:00:00Z");
        assert_eq!(edited.updated_at.as_deref(), Some("2025-11-01T08:00:00Z"));
        assert_eq!(edited.author_username.as_deref(), Some("admin"));

        let blank = BlogForm::default().validate(8, "admin", "now");
        assert_eq!(blank, Err(AdminError::Required("tiêu đề")));
    }

    #[test]
    fn account_rules() {
        let mut store = accounts();
        let weak = AccountForm {
            username: "florist".into(),
            password: "123".into(),
        };
        assert_eq!(weak.validate_create(&store, "2025-01-01"), Err(AdminError::WeakPassword));

        let bad_name = AccountForm {
            username: "Có Dấu".into(),
            password: "secret1".into(),
        };
        assert_eq!(bad_name.validate_create(&store, "2025-01-01"), Err(AdminError::InvalidUsername));

        let dup = AccountForm {
            username: "manager".into(),
            password: "secret1".into(),
        };
        assert!(matches!(
            dup.validate_create(&store, "2025-01-01"),
            Err(AdminError::DuplicateUsername(_))
        ));

        let rename = AccountForm {
            username: "manager_2".into(),
            password: String::new(),
        };
        let renamed = rename.validate_update(&store, 2).unwrap();
        assert_eq!(renamed.created_at, "2024-06-15");
        store.update(2, renamed).unwrap();
        assert_eq!(store.get(2).unwrap().username, "manager_2");
    }

    #[test]
    fn account_deletion_guards() {
        let mut store = accounts();
        assert_eq!(store.delete_account(1, "admin"), Err(AdminError::SelfDelete));
        assert_eq!(store.delete_account(2, "admin").unwrap().username, "manager");
        assert_eq!(store.delete_account(1, "someone"), Err(AdminError::LastAccount));
        assert_eq!(store.delete_account(5, "admin"), Err(AdminError::NotFound(5)));
    }

    #[test]
    fn dashboard_counts() {
        let catalog = Catalog::bundled();
        let stats = DashboardStats::from_catalog(catalog, &accounts());
        assert_eq!(stats.products, 24);
        assert_eq!(stats.blogs, 6);
        assert_eq!(stats.categories, 7);
        assert_eq!(stats.accounts, 2);
        let bucketed: usize = stats.price_buckets.iter().map(|(_, n)| n).sum();
        assert_eq!(bucketed, 24);
        assert!(stats.average_price.unwrap() > 0);

        let empty = DashboardStats::from_parts(&[], 0, 0, 0);
        assert!(empty.average_price.is_none());
    }

    #[test]
    fn dashboard_average_survives_huge_prices() {
        let catalog = Catalog::bundled();
        let mut store = AdminStore::new(catalog.products.clone());
        let form = ProductForm {
            price: i64::MAX.to_string(),
            ..ProductForm::from_product(&catalog.products[0])
        };
        let id = store.next_id();
        store.create(form.validate(id, &catalog.categories).unwrap());

        let stats = DashboardStats::from_parts(store.list(), 0, 0, 0);
        assert_eq!(stats.products, 25);
        let average = stats.average_price.unwrap();
        assert!(average > i64::MAX / 25);
        assert!(average < i64::MAX);

        let lone = catalog.products[0].clone();
        let maxed = Product { price: i64::MAX, ..lone };
        let stats = DashboardStats::from_parts(&[maxed.clone(), maxed], 0, 0, 0);
        assert_eq!(stats.average_price, Some(i64::MAX));
    }
}
