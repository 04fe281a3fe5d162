//! Back-office pages. Each one edits an in-memory store and hands the new
//! store back through `on_change`; nothing reaches the network.
pub mod accounts;
pub mod blogs;
pub mod dashboard;
pub mod products;

pub use accounts::AdminAccountsPage;
pub use blogs::AdminBlogsPage;
pub use dashboard::AdminDashboardPage;
pub use products::AdminProductsPage;

use crate::components::AdminSidebar;
use crate::components::daisy_ui::{Alert, DaisyColor, Modal};
use crate::router::Route;
use yew::prelude::*;

/// Which record the edit modal is working on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditTarget {
    New,
    Existing(u64),
}

impl EditTarget {
    pub(crate) fn modal_title(self, noun: &str) -> String {
        match self {
            Self::New => format!("Thêm {noun} mới"),
            Self::Existing(_) => format!("Chỉnh sửa {noun}"),
        }
    }
}

/// Outcome banner shown above an admin table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub(crate) fn notice_view(notice: Option<&Notice>, on_dismiss: Callback<()>) -> Html {
    match notice {
        Some(Notice::Success(message)) => html! {
            <Alert message={message.clone()} variant={DaisyColor::Success} on_dismiss={on_dismiss} />
        },
        Some(Notice::Error(message)) => html! {
            <Alert message={message.clone()} variant={DaisyColor::Error} on_dismiss={on_dismiss} />
        },
        None => Html::default(),
    }
}

/// Edit and delete buttons for one table row.
pub(crate) fn row_actions(id: u64, on_edit: &Callback<u64>, on_delete: &Callback<u64>) -> Html {
    let edit = {
        let cb = on_edit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let delete = {
        let cb = on_delete.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    html! {
        <div class="flex gap-2">
            <button type="button" class="btn btn-ghost btn-xs" onclick={edit} aria-label={format!("Sửa #{id}")}>{ "✏️" }</button>
            <button type="button" class="btn btn-ghost btn-xs text-error" onclick={delete} aria-label={format!("Xóa #{id}")}>{ "🗑️" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDeleteProps {
    pub pending: Option<u64>,
    pub message: AttrValue,
    pub on_confirm: Callback<u64>,
    pub on_cancel: Callback<()>,
}

/// Yes/no modal guarding a delete.
#[function_component(ConfirmDelete)]
pub fn confirm_delete(props: &ConfirmDeleteProps) -> Html {
    let confirm = {
        let cb = props.on_confirm.clone();
        let pending = props.pending;
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = pending {
                cb.emit(id);
            }
        })
    };
    let cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let actions = html! {
        <>
            <button type="button" class="btn btn-ghost" onclick={cancel}>{ "Hủy" }</button>
            <button type="button" class="btn btn-error" onclick={confirm}>{ "Xóa" }</button>
        </>
    };
    html! {
        <Modal open={props.pending.is_some()} title="Xác nhận xóa" actions={actions} on_close={props.on_cancel.clone()}>
            <p>{ props.message.clone() }</p>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub active: Route,
    pub username: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Sidebar plus page header around every admin screen.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex bg-base-200">
            <AdminSidebar active={props.active.clone()} username={props.username.clone()} on_logout={props.on_logout.clone()} />
            <main class="flex-1 flex flex-col min-w-0">
                <header class="bg-base-100 border-b px-8 py-5">
                    <h1 class="text-2xl font-bold">{ props.title.clone() }</h1>
                    <p class="text-sm text-base-content/60">
                        { props.subtitle.clone().unwrap_or_else(|| "Quản lý cửa hàng hoa Florist".into()) }
                    </p>
                </header>
                <div class="p-8 flex flex-col gap-6">
                    { props.children.clone() }
                </div>
            </main>
        </div>
    }
}
