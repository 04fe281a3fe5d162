use super::{ConfirmDelete, EditTarget, Notice, notice_view, row_actions};
use crate::components::daisy_ui::{
    Alert, Button, DaisyColor, Modal, SelectField, SelectOption, Table, TextAreaField, TextField,
};
use crate::components::{ListingKind, Pagination};
use crate::hooks::use_pagination;
use crate::paths::image_src;
use flora_core::{
    ALL_CATEGORIES, AdminProductFilter, AdminStore, Category, PageSize, Product, ProductForm,
    format_price,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminProductsPageProps {
    pub store: AdminStore<Product>,
    #[prop_or_default]
    pub categories: Vec<Category>,
    #[prop_or_default]
    pub page_size: PageSize,
    #[prop_or_default]
    pub on_change: Callback<AdminStore<Product>>,
}

fn category_filter_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL_CATEGORIES, "Tất cả danh mục"))
        .chain(categories.iter().map(|c| SelectOption::new(c.id.to_string(), c.name.clone())))
        .collect()
}

fn category_form_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "-- Chọn danh mục --"))
        .chain(categories.iter().map(|c| SelectOption::new(c.id.to_string(), c.name.clone())))
        .collect()
}

/// Apply a submitted form to `store`.
///
/// # Errors
///
/// Returns the validation message to show in the modal.
pub fn save_product(
    store: &AdminStore<Product>,
    target: EditTarget,
    form: &ProductForm,
    categories: &[Category],
) -> Result<(AdminStore<Product>, &'static str), String> {
    let mut next = store.clone();
    match target {
        EditTarget::New => {
            let product = form
                .validate(next.next_id(), categories)
                .map_err(|err| err.to_string())?;
            next.create(product);
            Ok((next, "Thêm sản phẩm thành công!"))
        }
        EditTarget::Existing(id) => {
            let existing = next.get(id).cloned().ok_or_else(|| format!("Không tìm thấy bản ghi #{id}"))?;
            let product = form
                .merge_into(&existing, categories)
                .map_err(|err| err.to_string())?;
            next.update(id, product).map_err(|err| err.to_string())?;
            Ok((next, "Cập nhật sản phẩm thành công!"))
        }
    }
}

#[function_component(AdminProductsPage)]
pub fn admin_products_page(props: &AdminProductsPageProps) -> Html {
    let filter = use_state(AdminProductFilter::default);
    let editing = use_state(|| None::<EditTarget>);
    let form = use_state(ProductForm::default);
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
    let on_category = {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            next.set_category(&value);
            filter.set(next);
        })
    };

    let open_new = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        Callback::from(move |_: MouseEvent| {
            form.set(ProductForm::default());
            form_error.set(None);
            editing.set(Some(EditTarget::New));
        })
    };
    let open_edit = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        let store = props.store.clone();
        Callback::from(move |id: u64| {
            if let Some(product) = store.get(id) {
                form.set(ProductForm::from_product(product));
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
    let edit_field = |apply: fn(&mut ProductForm, String)| {
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
        let categories = props.categories.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(target) = *editing else { return };
            match save_product(&store, target, &form, &categories) {
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
                    notice.set(Some(Notice::Success("Xóa sản phẩm thành công!".to_string())));
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
        .map(|product| format!("Bạn có chắc muốn xóa \"{}\"?", product.name))
        .unwrap_or_default();

    let modal_actions = html! {
        <>
            <button type="button" class="btn btn-ghost" onclick={cancel_modal}>{ "Hủy" }</button>
            <button type="button" class="btn btn-primary" onclick={on_save}>
                { if matches!(*editing, Some(EditTarget::Existing(_))) { "Lưu thay đổi" } else { "Thêm sản phẩm" } }
            </button>
        </>
    };

    html! {
        <>
            <div class="flex flex-wrap justify-between items-center gap-4">
                <p class="text-base-content/60">{ "Thêm, sửa, xóa sản phẩm của cửa hàng" }</p>
                <Button variant={DaisyColor::Primary} onclick={open_new}>{ "+ Thêm sản phẩm" }</Button>
            </div>
            { notice_view((*notice).as_ref(), dismiss_notice) }
            <div class="card bg-base-100 shadow-sm p-4 grid grid-cols-1 md:grid-cols-3 gap-4">
                <TextField
                    id="admin-product-search"
                    class={classes!("md:col-span-2")}
                    input_type="search"
                    placeholder="Tìm kiếm sản phẩm..."
                    value={filter.query.clone()}
                    oninput={on_search}
                />
                <SelectField
                    id="admin-product-category"
                    options={category_filter_options(&props.categories)}
                    value={filter.category_select_value()}
                    on_change={on_category}
                />
            </div>
            <Table
                headers={vec!["Sản phẩm".into(), "Danh mục".into(), "Giá".into(), "Mã SP".into(), "Thao tác".into()]}
                empty_message="Không tìm thấy sản phẩm nào"
            >
                { for page.items.iter().map(|product| html! {
                    <tr key={product.id}>
                        <td>
                            <div class="flex items-center gap-3">
                                <img src={image_src(&product.image_url)} alt={product.name.clone()} class="w-12 h-12 rounded-lg object-cover" />
                                <span class="font-medium">{ product.name.clone() }</span>
                            </div>
                        </td>
                        <td>{ product.category.as_ref().map_or_else(|| "—".to_string(), |c| c.name.clone()) }</td>
                        <td class="font-semibold text-primary">{ format_price(product.price) }</td>
                        <td><code>{ product.product_code.clone().unwrap_or_default() }</code></td>
                        <td>{ row_actions(product.id, &open_edit, &ask_delete) }</td>
                    </tr>
                }) }
            </Table>
            <Pagination
                current_page={page.current_page}
                total_pages={page.total_pages}
                total_items={page.total_items}
                page_size={page.page_size.get()}
                kind={ListingKind::Product}
                on_change={page.set_page.clone()}
            />
            <Modal
                open={editing.is_some()}
                title={(*editing).map(|target| target.modal_title("sản phẩm")).unwrap_or_default()}
                actions={modal_actions}
                on_close={close_modal}
            >
                <div class="flex flex-col gap-4">
                    { (*form_error).clone().map(|message| html! { <Alert message={message} variant={DaisyColor::Error} /> }).unwrap_or_default() }
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField id="product-code" label="Mã sản phẩm" placeholder="VD: FL001"
                            value={form.product_code.clone()} oninput={edit_field(|f, v| f.product_code = v)} />
                        <TextField id="product-name" label="Tên sản phẩm" placeholder="VD: Bó hoa hồng đỏ" required=true
                            value={form.name.clone()} oninput={edit_field(|f, v| f.name = v)} />
                    </div>
                    <TextAreaField id="product-description" label="Mô tả" placeholder="Mô tả chi tiết sản phẩm..." rows={3}
                        value={form.description.clone()} oninput={edit_field(|f, v| f.description = v)} />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField id="product-price" label="Giá bán (VNĐ)" input_type="number" placeholder="VD: 500000" required=true
                            value={form.price.clone()} oninput={edit_field(|f, v| f.price = v)} />
                        <SelectField id="product-category" label="Danh mục" options={category_form_options(&props.categories)}
                            value={form.category_id.clone()} on_change={edit_field(|f, v| f.category_id = v)} />
                    </div>
                    <TextField id="product-image" label="URL hình ảnh" placeholder="https://example.com/image.jpg"
                        value={form.image_url.clone()} oninput={edit_field(|f, v| f.image_url = v)} />
                    if !form.image_url.trim().is_empty() {
                        <img src={image_src(form.image_url.trim())} alt="Xem trước" class="w-32 h-32 rounded-lg object-cover" />
                    }
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
