use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TableProps {
    pub headers: Vec<f::AttrValue>,
    /// Rendered when there are no row children.
    #[prop_or_else(|| "Không có dữ liệu".into())]
    pub empty_message: f::AttrValue,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Table)]
pub fn table(props: &TableProps) -> f::Html {
    let class = f::class_list(&["table", "table-zebra", "w-full"], &props.class);
    let columns = props.headers.len().to_string();
    f::html! {
        <div class="overflow-x-auto">
            <table class={class}>
                <thead>
                    <tr>
                        { for props.headers.iter().map(|head| f::html! { <th scope="col">{ head.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    if props.children.is_empty() {
                        <tr>
                            <td colspan={columns} class="text-center text-base-content/60">{ props.empty_message.clone() }</td>
                        </tr>
                    } else {
                        { for props.children.iter() }
                    }
                </tbody>
            </table>
        </div>
    }
}
