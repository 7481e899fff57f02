#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use htmx_extras_core::{
    BannerSpec, ExtrasConfig, ScreenAreaRules, SwapStyle, banner::DEFAULT_BANNER_TEXT,
};
use htmx_extras_web::{HtmxExtras, HtmxExtrasBuilder, Htmx, Page, WebError};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, CustomEventInit, Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn set(target: &JsValue, key: &str, value: &JsValue) {
    Reflect::set(target, &key.into(), value).unwrap();
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &key.into()).unwrap()
}

/// Stands in for the real htmx bundle: only `htmx.config` is touched.
fn fake_htmx() {
    let htmx = Object::new();
    set(&htmx, "config", &Object::new());
    set(&web_sys::window().unwrap(), "htmx", &htmx);
}

fn remove_htmx() {
    Reflect::delete_property(&web_sys::window().unwrap(), &"htmx".into()).unwrap();
}

fn installed() -> HtmxExtras {
    fake_htmx();
    HtmxExtrasBuilder::new().install().unwrap()
}

fn dispatch(name: &str, detail: &JsValue) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(detail);
    let event = CustomEvent::new_with_event_init_dict(name, &init).unwrap();
    page().document().dispatch_event(&event).unwrap();
}

fn insert_link(id: &str, href: &str) -> Element {
    let document = page().document().clone();
    let link = document.create_element("a").unwrap();
    link.set_id(id);
    link.set_attribute("href", href).unwrap();
    document.body().unwrap().append_child(&link).unwrap();
    link
}

fn href(link: &Element) -> String {
    link.get_attribute("href").unwrap()
}

fn page() -> Page {
    Page::new().unwrap()
}

fn banners() -> Vec<Element> {
    let nodes = page()
        .document()
        .query_selector_all("p.bg-red-100")
        .unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
        .collect()
}

fn before_swap_detail(status: u16, should_swap: bool, is_error: bool) -> JsValue {
    let xhr = Object::new();
    set(&xhr, "status", &JsValue::from(status));
    let detail: JsValue = Object::new().into();
    set(&detail, "xhr", &xhr);
    set(&detail, "shouldSwap", &JsValue::from_bool(should_swap));
    set(&detail, "isError", &JsValue::from_bool(is_error));
    detail
}

#[wasm_bindgen_test]
fn install_sets_outer_html_default() {
    let extras = installed();
    let htmx = Htmx::from_window(page().window()).unwrap();
    assert_eq!(htmx.default_swap_style().unwrap(), Some(SwapStyle::OuterHtml));
    assert!(extras.is_active());
    assert!(extras.events().any(|event| event == "htmx:beforeSwap"));
}

#[wasm_bindgen_test]
fn install_without_htmx_fails() {
    remove_htmx();
    let result = HtmxExtrasBuilder::new().install();
    assert!(matches!(result, Err(WebError::HtmxUnavailable)));
}

#[wasm_bindgen_test]
fn failure_event_shows_one_banner_on_top() {
    let _extras = installed();
    let before = banners().len();

    dispatch("htmx:responseError", &JsValue::NULL);

    let body = page().document().body().unwrap();
    let first = body.first_element_child().unwrap();
    assert_eq!(banners().len(), before + 1);
    assert_eq!(first.tag_name(), "P");
    assert_eq!(first.text_content().as_deref(), Some(DEFAULT_BANNER_TEXT));
    assert_eq!(first.id().len(), 20);
    assert!(first.class_list().contains("sticky"));

    first.dyn_into::<HtmlElement>().unwrap().click();
    assert_eq!(banners().len(), before);
}

#[wasm_bindgen_test]
fn clicking_removes_only_that_banner() {
    let _extras = installed();
    let before = banners().len();
    dispatch("htmx:responseError", &JsValue::NULL);
    dispatch("htmx:sendError", &JsValue::NULL);
    assert_eq!(banners().len(), before + 2);

    let top = page().document().body().unwrap().first_element_child().unwrap();
    let top_id = top.id();
    top.dyn_into::<HtmlElement>().unwrap().click();

    let remaining = banners();
    assert_eq!(remaining.len(), before + 1);
    assert!(remaining.iter().all(|banner| banner.id() != top_id));
    for banner in remaining {
        banner.remove();
    }
}

#[wasm_bindgen_test]
fn bad_request_is_swapped() {
    let _extras = installed();
    let detail = before_swap_detail(400, false, true);
    dispatch("htmx:beforeSwap", &detail);
    assert_eq!(get(&detail, "shouldSwap").as_bool(), Some(true));
    assert_eq!(get(&detail, "isError").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn other_statuses_are_left_alone() {
    let _extras = installed();
    for status in [200, 404, 500] {
        let detail = before_swap_detail(status, false, true);
        dispatch("htmx:beforeSwap", &detail);
        assert_eq!(get(&detail, "shouldSwap").as_bool(), Some(false));
        assert_eq!(get(&detail, "isError").as_bool(), Some(true));
    }
}

#[wasm_bindgen_test]
fn disposed_glue_ignores_events() {
    let mut extras = installed();
    extras.dispose();
    assert!(!extras.is_active());
    let before = banners().len();
    dispatch("htmx:responseError", &JsValue::NULL);
    assert_eq!(banners().len(), before);
}

#[wasm_bindgen_test]
fn rewrites_only_book_links() {
    let page = page();
    let document = page.document();
    let body = document.body().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(
        r#"<a id="t-book" href="/book?x=1">read</a>
           <button id="t-next" hx-get="/book/next-page">next</button>
           <a id="t-about" href="/about?x=1">about</a>"#,
    );
    body.append_child(&host).unwrap();

    let origin = page.window().location().origin().unwrap();
    let rewritten = page.rewrite_links(500, &ScreenAreaRules::default()).unwrap();
    let attr = |id: &str, name: &str| document.get_element_by_id(id).unwrap().get_attribute(name).unwrap();

    assert!(rewritten >= 2);
    assert_eq!(attr("t-book", "href"), format!("{origin}/book?x=1&screen_area=500"));
    assert_eq!(attr("t-next", "hx-get"), format!("{origin}/book/next-page?screen_area=500"));
    assert_eq!(attr("t-about", "href"), "/about?x=1");
    host.remove();
}

#[wasm_bindgen_test]
fn no_navigation_off_the_reader_route() {
    let page = page();
    let area = page.viewport().unwrap().area();
    assert!(!page.ensure_screen_area(area, &ScreenAreaRules::default()).unwrap());
}

#[wasm_bindgen_test]
fn page_banner_uses_given_id() {
    let page = page();
    let banner = BannerSpec::with_id(&Default::default(), "knownBannerId");
    let element = page.show_banner(&banner).unwrap();
    assert_eq!(element.id(), "knownBannerId");
    assert!(page.document().get_element_by_id("knownBannerId").is_some());
    element.click();
    assert!(page.document().get_element_by_id("knownBannerId").is_none());
}

#[wasm_bindgen_test]
fn after_swap_rewrites_new_links() {
    let _extras = installed();
    let link = insert_link("t-swapped", "/book?page=2");

    dispatch("htmx:afterSwap", &JsValue::NULL);

    let page = page();
    let origin = page.window().location().origin().unwrap();
    let area = page.viewport().unwrap().area();
    assert_eq!(href(&link), format!("{origin}/book?page=2&screen_area={area}"));
    link.remove();
}

#[wasm_bindgen_test]
async fn resize_burst_recomputes_once_after_quiet_period() {
    let _extras = installed();
    let link = insert_link("t-resized", "/book");
    let window = page().window().clone();

    for _ in 0..5 {
        window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
        TimeoutFuture::new(20).await;
        assert_eq!(href(&link), "/book");
    }

    TimeoutFuture::new(250).await;
    let area = page().viewport().unwrap().area();
    assert!(href(&link).ends_with(&format!("/book?screen_area={area}")));
    link.remove();
}

#[wasm_bindgen_test]
fn failed_initial_recompute_keeps_listeners() {
    fake_htmx();
    let mut config = ExtrasConfig::default();
    config.screen_area.attributes = vec!["not[valid".into()];
    let _extras = HtmxExtrasBuilder::with_config(config).install().unwrap();

    let detail = before_swap_detail(400, false, true);
    dispatch("htmx:beforeSwap", &detail);
    assert_eq!(get(&detail, "shouldSwap").as_bool(), Some(true));

    let before = banners().len();
    dispatch("htmx:responseError", &JsValue::NULL);
    assert_eq!(banners().len(), before + 1);
    for banner in banners() {
        banner.remove();
    }
}
