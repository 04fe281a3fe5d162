use flora_core::{
    Catalog, PageSize, PageToken, PageWindow, PagingSession, PriceRange, ProductFilters,
    display_range,
};

fn size(n: usize) -> PageSize {
    PageSize::new(n).unwrap()
}

#[test]
fn forty_five_items_page_in_twenties() {
    let items: Vec<usize> = (0..45).collect();
    let mut session = PagingSession::new(size(20));

    let first = session.view(&items);
    assert_eq!(first.items, &items[0..20]);
    assert_eq!(first.total_pages, 3);

    session.set_page(3);
    let last = session.view(&items);
    assert_eq!(last.items.len(), 5);
    assert_eq!(display_range(3, 20, 45), Some((41, 45)));

    let shrunk = &items[..10];
    let after = session.view(shrunk);
    assert_eq!(session.current_page(), 1);
    assert_eq!(after.items, &items[0..10]);
    assert_eq!(after.total_pages, 1);
}

#[test]
fn empty_listing_hides_the_pager() {
    let items: Vec<usize> = Vec::new();
    let mut session = PagingSession::new(size(20));
    let view = session.view(&items);
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert!(PageWindow::new(session.current_page(), view.total_pages).tokens.is_empty());
    assert_eq!(display_range(1, 20, 0), None);
}

#[test]
fn ten_page_windows() {
    use PageToken::{Ellipsis, Page};
    assert_eq!(
        PageWindow::new(1, 10).tokens.as_slice(),
        &[Page(1), Page(2), Ellipsis, Page(10)]
    );
    assert_eq!(
        PageWindow::new(6, 10).tokens.as_slice(),
        &[Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
    );
}

#[test]
fn narrowing_the_shop_filter_reconciles_the_pager() {
    let products = &Catalog::bundled().products;
    let mut session = PagingSession::new(size(4));
    let mut filters = ProductFilters::default();

    let all = filters.apply(products);
    assert_eq!(session.view(&all).total_pages, 6);
    session.set_page(5);
    assert_eq!(session.view(&all).items.len(), 4);

    filters = filters.with_price_range(PriceRange::Over1m);
    let expensive = filters.apply(products);
    let view = session.view(&expensive);
    assert_eq!(session.current_page(), 1);
    assert_eq!(view.total_items, expensive.len());
    assert!(view.items.iter().all(|p| p.price >= 1_000_000));
}

#[test]
fn widening_the_filter_keeps_the_page() {
    let products = &Catalog::bundled().products;
    let mut session = PagingSession::new(size(4));
    let narrow = ProductFilters::default().with_category(Some(1)).apply(products);
    session.view(&narrow);
    session.set_page(2);

    let wide = ProductFilters::default().apply(products);
    session.view(&wide);
    assert_eq!(session.current_page(), 2);
}

#[test]
fn separate_listings_page_independently() {
    let catalog = Catalog::bundled();
    let mut products = PagingSession::new(size(5));
    let mut blogs = PagingSession::new(size(5));

    products.view(&catalog.products);
    blogs.view(&catalog.blogs);
    products.set_page(4);

    assert_eq!(products.current_page(), 4);
    assert_eq!(blogs.current_page(), 1);
    assert_eq!(blogs.view(&catalog.blogs).items.len(), 5);
}
