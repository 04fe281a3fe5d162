use super::{ConfirmDelete, EditTarget, Notice, notice_view, row_actions};
use crate::components::daisy_ui::{Alert, Badge, Button, DaisyColor, Modal, Table, TextField};
use crate::components::{ListingKind, Pagination};
use crate::dom::now_iso;
use crate::hooks::use_pagination;
use flora_core::{
    Account, AccountFilter, AccountForm, AdminStore, PageSize, format_blog_date,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminAccountsPageProps {
    pub store: AdminStore<Account>,
    /// The logged-in admin, who may not delete their own account.
    pub current_username: AttrValue,
    #[prop_or_default]
    pub page_size: PageSize,
    #[prop_or_default]
    pub on_change: Callback<AdminStore<Account>>,
}

/// Apply a submitted account form to `store`.
///
/// # Errors
///
/// Returns the validation message to show in the modal.
pub fn save_account(
    store: &AdminStore<Account>,
    target: EditTarget,
    form: &AccountForm,
    created_at: &str,
) -> Result<(AdminStore<Account>, &'static str), String> {
    let mut next = store.clone();
    match target {
        EditTarget::New => {
            let account = form
                .validate_create(&next, created_at)
                .map_err(|err| err.to_string())?;
            next.create(account);
            Ok((next, "Thêm thành công!"))
        }
        EditTarget::Existing(id) => {
            let account = form.validate_update(&next, id).map_err(|err| err.to_string())?;
            next.update(id, account).map_err(|err| err.to_string())?;
            Ok((next, "Cập nhật thành công!"))
        }
    }
}

#[function_component(AdminAccountsPage)]
pub fn admin_accounts_page(props: &AdminAccountsPageProps) -> Html {
    let filter = use_state(AccountFilter::default);
    let editing = use_state(|| None::<EditTarget>);
    let form = use_state(AccountForm::default);
    let form_error = use_state(|| None::<String>);
    let notice = use_state(|| None::<Notice>);
    let pending_delete = use_state(|| None::<u64>);

    let rows = filter.apply(props.store.list());
    let page = use_pagination(&rows, props.page_size);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |value: String| filter.set(AccountFilter { query: value }))
    };
    let open_new = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        Callback::from(move |_: MouseEvent| {
            form.set(AccountForm::default());
            form_error.set(None);
            editing.set(Some(EditTarget::New));
        })
    };
    let open_edit = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        let store = props.store.clone();
        Callback::from(move |id: u64| {
            if let Some(account) = store.get(id) {
                form.set(AccountForm::from_account(account));
                form_error.set(None);
                editing.set(Some(EditTarget::Existing(id)));
            }
        })
    };
    let close_modal = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };
    let cancel_modal = {
        let close = close_modal.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_username = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(AccountForm {
                username: value,
                ..(*form).clone()
            });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(AccountForm {
                password: value,
                ..(*form).clone()
            });
        })
    };
    let on_save = {
        let (editing, form, form_error, notice) =
            (editing.clone(), form.clone(), form_error.clone(), notice.clone());
        let store = props.store.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(target) = *editing else { return };
            match save_account(&store, target, &form, &now_iso()) {
                Ok((next, message)) => {
                    on_change.emit(next);
                    notice.set(Some(Notice::Success(message.to_string())));
                    editing.set(None);
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let ask_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |id: u64| pending_delete.set(Some(id)))
    };
    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| pending_delete.set(None))
    };
    let confirm_delete = {
        let (pending_delete, notice) = (pending_delete.clone(), notice.clone());
        let store = props.store.clone();
        let current = props.current_username.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |id: u64| {
            let mut next = store.clone();
            match next.delete_account(id, &current) {
                Ok(account) => {
                    log::info!("admin account {} removed", account.username);
                    on_change.emit(next);
                    notice.set(Some(Notice::Success("Xóa thành công!".to_string())));
                }
                Err(err) => notice.set(Some(Notice::Error(err.to_string()))),
            }
            pending_delete.set(None);
        })
    };
    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let delete_message = (*pending_delete)
        .and_then(|id| props.store.get(id))
        .map(|account| format!("Xóa tài khoản \"{}\"?", account.username))
        .unwrap_or_default();
    let is_edit = matches!(*editing, Some(EditTarget::Existing(_)));

    let modal_actions = html! {
        <>
            <button type="button" class="btn btn-ghost" onclick={cancel_modal}>{ "Hủy" }</button>
            <button type="button" class="btn btn-primary" onclick={on_save}>{ if is_edit { "Lưu" } else { "Thêm" } }</button>
        </>
    };

    html! {
        <>
            <div class="flex flex-wrap justify-between items-center gap-4">
                <p class="text-base-content/60">{ "Thêm và quản lý tài khoản quản trị" }</p>
                <Button variant={DaisyColor::Primary} onclick={open_new}>{ "+ Thêm tài khoản" }</Button>
            </div>
            { notice_view((*notice).as_ref(), dismiss_notice) }
            <div class="card bg-base-100 shadow-sm p-4">
                <TextField
                    id="admin-account-search"
                    input_type="search"
                    placeholder="Tìm kiếm tài khoản..."
                    value={filter.query.clone()}
                    oninput={on_search}
                />
            </div>
            <Table
                headers={vec!["Tài khoản".into(), "Vai trò".into(), "Ngày tạo".into(), "Trạng thái".into(), "Thao tác".into()]}
                empty_message="Không tìm thấy tài khoản nào"
            >
                { for page.items.iter().map(|account| {
                    let is_current = account.username == props.current_username.as_str();
                    html! {
                        <tr key={account.id}>
                            <td>
                                <div class="flex items-center gap-3">
                                    <div class="avatar placeholder">
                                        <div class="bg-primary text-primary-content rounded-full w-10">
                                            <span>{ account.username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default() }</span>
                                        </div>
                                    </div>
                                    <span class="font-medium">{ account.username.clone() }</span>
                                </div>
                            </td>
                            <td><Badge label="Admin" variant={DaisyColor::Secondary} /></td>
                            <td>{ format_blog_date(&account.created_at).unwrap_or_else(|| account.created_at.clone()) }</td>
                            <td>
                                if is_current {
                                    <Badge label="Đang đăng nhập" variant={DaisyColor::Success} />
                                } else {
                                    <Badge label="Hoạt động" outline={true} />
                                }
                            </td>
                            <td>{ row_actions(account.id, &open_edit, &ask_delete) }</td>
                        </tr>
                    }
                }) }
            </Table>
            <Pagination
                current_page={page.current_page}
                total_pages={page.total_pages}
                total_items={page.total_items}
                page_size={page.page_size.get()}
                kind={ListingKind::Account}
                on_change={page.set_page.clone()}
            />
            <Modal
                open={editing.is_some()}
                title={if is_edit { "Đổi mật khẩu" } else { "Thêm tài khoản" }}
                actions={modal_actions}
                on_close={close_modal}
            >
                <div class="flex flex-col gap-4">
                    { (*form_error).clone().map(|message| html! { <Alert message={message} variant={DaisyColor::Error} /> }).unwrap_or_default() }
                    <TextField id="account-username" label="Tên đăng nhập" required=true disabled={is_edit}
                        value={form.username.clone()} oninput={on_username} />
                    <TextField id="account-password" input_type="password" required={!is_edit}
                        label={if is_edit { "Mật khẩu mới" } else { "Mật khẩu" }}
                        placeholder={is_edit.then_some("Để trống nếu không đổi")}
                        value={form.password.clone()} oninput={on_password} />
                </div>
            </Modal>
            <ConfirmDelete
                pending={*pending_delete}
                message={delete_message}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flora_core::{AdminError, Catalog};

    fn store() -> AdminStore<Account> {
        AdminStore::new(Catalog::bundled().accounts.clone())
    }

    #[test]
    fn created_accounts_get_a_fresh_id() {
        let form = AccountForm {
            username: "florist_02".into(),
            password: "secret99".into(),
        };
        let (next, message) = save_account(&store(), EditTarget::New, &form, "2025-01-01T00:00:00Z").unwrap();
        assert_eq!(message, "Thêm thành công!");
        assert_eq!(next.len(), 3);
        assert!(next.list().iter().any(|account| account.username == "florist_02"));
    }

    #[test]
    fn short_passwords_are_rejected() {
        let form = AccountForm {
            username: "florist_03".into(),
            password: "123".into(),
        };
        let err = save_account(&store(), EditTarget::New, &form, "2025-01-01T00:00:00Z").unwrap_err();
        assert_eq!(err, AdminError::WeakPassword.to_string());
    }

    #[test]
    fn the_logged_in_admin_cannot_delete_themselves() {
        let mut accounts = store();
        let own = accounts.list().iter().find(|account| account.username == "admin").map(|a| a.id).unwrap();
        assert_eq!(accounts.delete_account(own, "admin"), Err(AdminError::SelfDelete));
    }
}
