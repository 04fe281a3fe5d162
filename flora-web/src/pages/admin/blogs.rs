use super::{ConfirmDelete, EditTarget, Notice, notice_view, row_actions};
use crate::components::daisy_ui::{
    Alert, Badge, Button, DaisyColor, Modal, SelectField, SelectOption, Table, TextAreaField,
    TextField,
};
use crate::components::{ListingKind, Pagination};
use crate::dom::now_iso;
use crate::hooks::use_pagination;
use crate::paths::image_src;
use flora_core::{
    AdminStore, Blog, BlogFilter, BlogForm, BlogStatus, PageSize, format_blog_date,
    truncate_content,
};
use yew::prelude::*;

const fn status_label(status: BlogStatus) -> &'static str {
    match status {
        BlogStatus::Draft => "Nháp",
        BlogStatus::Published => "Xuất bản",
    }
}

fn status_options(all_label: Option<&str>) -> Vec<SelectOption> {
    all_label
        .map(|label| SelectOption::new("", label.to_string()))
        .into_iter()
        .chain(
            [BlogStatus::Draft, BlogStatus::Published]
                .into_iter()
                .map(|status| SelectOption::new(status.key(), status_label(status))),
        )
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct AdminBlogsPageProps {
    pub store: AdminStore<Blog>,
    /// Username recorded as the author of new posts.
    pub author: AttrValue,
    #[prop_or_default]
    pub page_size: PageSize,
    #[prop_or_default]
    pub on_change: Callback<AdminStore<Blog>>,
}

/// Apply a submitted post form to `store`, stamping it with `timestamp`.
///
/// # Errors
///
/// Returns the validation message to show in the modal.
pub fn save_blog(
    store: &AdminStore<Blog>,
    target: EditTarget,
    form: &BlogForm,
    author: &str,
    timestamp: &str,
) -> Result<(AdminStore<Blog>, &'static str), String> {
    let mut next = store.clone();
    match target {
        EditTarget::New => {
            let blog = form
                .validate(next.next_id(), author, timestamp)
                .map_err(|err| err.to_string())?;
            next.create(blog);
            Ok((next, "Tạo thành công!"))
        }
        EditTarget::Existing(id) => {
            let existing = next.get(id).cloned().ok_or_else(|| format!("Không tìm thấy bản ghi #{id}"))?;
            let blog = form.merge_into(&existing, timestamp).map_err(|err| err.to_string())?;
            next.update(id, blog).map_err(|err| err.to_string())?;
            Ok((next, "Cập nhật thành công!"))
        }
    }
}

#[function_component(AdminBlogsPage)]
pub fn admin_blogs_page(props: &AdminBlogsPageProps) -> Html {
    let filter = use_state(BlogFilter::default);
    let editing = use_state(|| None::<EditTarget>);
    let form = use_state(BlogForm::default);
    let form_error = use_state(|| None::<String>);
    let notice = use_state(|| None::<Notice>);
    let pending_delete = use_state(|| None::<u64>);

    let rows = filter.apply(props.store.list());
    let page = use_pagination(&rows, props.page_size);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            next.query = value;
            filter.set(next);
        })
    };
    let on_status = {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            next.set_status(&value);
            filter.set(next);
        })
    };

    let open_new = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        Callback::from(move |_: MouseEvent| {
            form.set(BlogForm::default());
            form_error.set(None);
            editing.set(Some(EditTarget::New));
        })
    };
    let open_edit = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        let store = props.store.clone();
        Callback::from(move |id: u64| {
            if let Some(blog) = store.get(id) {
                form.set(BlogForm::from_blog(blog));
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
    let edit_field = |apply: fn(&mut BlogForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_save = {
        let (editing, form, form_error, notice) =
            (editing.clone(), form.clone(), form_error.clone(), notice.clone());
        let store = props.store.clone();
        let author = props.author.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(target) = *editing else { return };
            match save_blog(&store, target, &form, &author, &now_iso()) {
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
        let on_change = props.on_change.clone();
        Callback::from(move |id: u64| {
            let mut next = store.clone();
            match next.delete(id) {
                Ok(_) => {
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
        .map(|blog| format!("Xóa \"{}\"?", blog.title))
        .unwrap_or_default();
    let status_value: AttrValue = filter.status.map_or("", BlogStatus::key).into();

    let modal_actions = html! {
        <>
            <button type="button" class="btn btn-ghost" onclick={cancel_modal}>{ "Hủy" }</button>
            <button type="button" class="btn btn-primary" onclick={on_save}>{ "Lưu" }</button>
        </>
    };
    let modal_title = match *editing {
        Some(EditTarget::Existing(_)) => "Sửa bài viết",
        _ => "Tạo bài viết",
    };

    html! {
        <>
            <div class="flex flex-wrap justify-between items-center gap-4">
                <p class="text-base-content/60">{ format!("{} bài viết", props.store.len()) }</p>
                <Button variant={DaisyColor::Primary} onclick={open_new}>{ "+ Viết bài" }</Button>
            </div>
            { notice_view((*notice).as_ref(), dismiss_notice) }
            <div class="card bg-base-100 shadow-sm p-4 grid grid-cols-1 md:grid-cols-3 gap-4">
                <TextField
                    id="admin-blog-search"
                    class={classes!("md:col-span-2")}
                    input_type="search"
                    placeholder="Tìm kiếm..."
                    value={filter.query.clone()}
                    oninput={on_search}
                />
                <SelectField
                    id="admin-blog-status"
                    options={status_options(Some("Tất cả trạng thái"))}
                    value={status_value}
                    on_change={on_status}
                />
            </div>
            <Table
                headers={vec!["Bài viết".into(), "Tác giả".into(), "Trạng thái".into(), "Ngày tạo".into(), "Thao tác".into()]}
                empty_message="Không có bài viết nào"
            >
                { for page.items.iter().map(|blog| {
                    let variant = match blog.status {
                        BlogStatus::Published => DaisyColor::Success,
                        BlogStatus::Draft => DaisyColor::Warning,
                    };
                    html! {
                        <tr key={blog.id}>
                            <td>
                                <div class="flex items-center gap-3">
                                    <img src={image_src(&blog.image_url)} alt={blog.title.clone()} class="w-16 h-12 rounded-lg object-cover" />
                                    <div class="min-w-0">
                                        <p class="font-medium line-clamp-1">{ blog.title.clone() }</p>
                                        <p class="text-xs text-base-content/60 line-clamp-1">
                                            { blog.summary.clone().unwrap_or_else(|| truncate_content(&blog.content, 60)) }
                                        </p>
                                    </div>
                                </div>
                            </td>
                            <td>{ blog.author_username.clone().unwrap_or_else(|| "Admin".to_string()) }</td>
                            <td><Badge label={status_label(blog.status)} variant={variant} /></td>
                            <td>{ format_blog_date(&blog.created_at).unwrap_or_else(|| blog.created_at.clone()) }</td>
                            <td>{ row_actions(blog.id, &open_edit, &ask_delete) }</td>
                        </tr>
                    }
                }) }
            </Table>
            <Pagination
                current_page={page.current_page}
                total_pages={page.total_pages}
                total_items={page.total_items}
                page_size={page.page_size.get()}
                kind={ListingKind::Post}
                on_change={page.set_page.clone()}
            />
            <Modal open={editing.is_some()} title={modal_title} actions={modal_actions} on_close={close_modal}>
                <div class="flex flex-col gap-4">
                    { (*form_error).clone().map(|message| html! { <Alert message={message} variant={DaisyColor::Error} /> }).unwrap_or_default() }
                    <TextField id="blog-title" label="Tiêu đề" required=true
                        value={form.title.clone()} oninput={edit_field(|f, v| f.title = v)} />
                    <TextField id="blog-image" label="URL ảnh"
                        value={form.image_url.clone()} oninput={edit_field(|f, v| f.image_url = v)} />
                    <TextAreaField id="blog-summary" label="Tóm tắt" rows={2}
                        value={form.summary.clone()} oninput={edit_field(|f, v| f.summary = v)} />
                    <TextAreaField id="blog-content" label="Nội dung" rows={8} required=true
                        value={form.content.clone()} oninput={edit_field(|f, v| f.content = v)} />
                    <SelectField id="blog-status" label="Trạng thái" options={status_options(None)}
                        value={form.status.key()}
                        on_change={edit_field(|f, v| f.status = BlogStatus::from_key(&v).unwrap_or_default())} />
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
