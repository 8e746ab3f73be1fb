//! Domain management tools.

pub mod check;
pub mod create;
pub mod get_contacts;
pub mod get_info;
pub mod list;
pub mod reactivate;
pub mod registrar_lock;
pub mod renew;
pub mod set_contacts;
pub mod tld_list;

pub use check::DomainsCheckTool;
pub use create::DomainsCreateTool;
pub use get_contacts::DomainsGetContactsTool;
pub use get_info::DomainsGetInfoTool;
pub use list::DomainsListTool;
pub use reactivate::DomainsReactivateTool;
pub use registrar_lock::{DomainsGetRegistrarLockTool, DomainsSetRegistrarLockTool};
pub use renew::DomainsRenewTool;
pub use set_contacts::DomainsSetContactsTool;
pub use tld_list::DomainsGetTldListTool;
