use crate::components::daisy_ui::{Alert, Button, DaisyColor, TextField};
use crate::router::Route;
use flora_core::Credentials;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_submit: Callback<Credentials>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub submitting: bool,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |value: String| username.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_toggle = {
        let show_password = show_password.clone();
        Callback::from(move |_: Event| show_password.set(!*show_password))
    };
    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            cb.emit(Credentials::new((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 px-4">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <form class="card-body gap-4" onsubmit={onsubmit} novalidate=true>
                    <div class="text-center">
                        <div class="text-5xl mb-2" aria-hidden="true">{ "🌸" }</div>
                        <h1 class="text-3xl font-bold">{ "Đăng nhập" }</h1>
                        <p class="text-base-content/60">{ "Quản trị viên Florist" }</p>
                    </div>
                    { props.error.clone().map(|message| html! {
                        <Alert message={message} variant={DaisyColor::Error} />
                    }).unwrap_or_default() }
                    <TextField
                        id="login-username"
                        label="Tên đăng nhập"
                        placeholder="Nhập tên đăng nhập"
                        value={(*username).clone()}
                        required=true
                        disabled={props.submitting}
                        oninput={on_username}
                    />
                    <TextField
                        id="login-password"
                        label="Mật khẩu"
                        placeholder="Nhập mật khẩu"
                        input_type={if *show_password { "text" } else { "password" }}
                        value={(*password).clone()}
                        required=true
                        disabled={props.submitting}
                        oninput={on_password}
                    />
                    <label class="label cursor-pointer justify-start gap-2">
                        <input type="checkbox" class="checkbox checkbox-sm" checked={*show_password} onchange={on_toggle} />
                        <span class="label-text">{ "Hiển thị mật khẩu" }</span>
                    </label>
                    <Button
                        button_type="submit"
                        variant={DaisyColor::Primary}
                        class={classes!("w-full")}
                        loading={props.submitting}
                        disabled={props.submitting}
                        label={if props.submitting { "Đang kiểm tra..." } else { "Đăng nhập" }}
                    />
                    <p class="text-sm text-center text-base-content/60">
                        { "Liên hệ quản trị viên cao cấp nếu bạn quên thông tin đăng nhập." }
                    </p>
                    <Link<Route> to={Route::Home} classes={classes!("link", "link-hover", "text-center", "text-sm")}>
                        { "← Quay lại trang chủ" }
                    </Link<Route>>
                </form>
            </div>
        </div>
    }
}
