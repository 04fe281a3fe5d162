use flora_core::pagination::{
    MAX_TOKENS, PageSize, PageToken, PagingSession, SHOW_PAGES, compute_window, derive,
    total_pages,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ITERATIONS: u64 = 400;

fn random_case(rng: &mut ChaCha8Rng) -> (Vec<u32>, PageSize) {
    let len = rng.gen_range(0..=240);
    let size = PageSize::new(rng.gen_range(1..=37)).unwrap();
    ((0..len).collect(), size)
}

#[test]
fn pages_partition_the_collection() {
    for seed in 0..ITERATIONS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (items, size) = random_case(&mut rng);
        let pages = total_pages(items.len(), size);

        let mut rebuilt = Vec::with_capacity(items.len());
        for page in 1..=pages {
            let slice = derive(&items, size, page).items;
            assert!(!slice.is_empty(), "seed {seed}: page {page} of {pages} is empty");
            assert!(slice.len() <= size.get());
            rebuilt.extend_from_slice(slice);
        }
        assert_eq!(rebuilt, items, "seed {seed}: pages do not rebuild the collection");
        assert!(derive(&items, size, pages + 1).is_empty());
    }
}

#[test]
fn total_pages_is_ceiling_division() {
    for seed in 0..ITERATIONS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let len: usize = rng.gen_range(0..=10_000);
        let size = PageSize::new(rng.gen_range(1..=500)).unwrap();
        let expected = (len + size.get() - 1) / size.get();
        assert_eq!(total_pages(len, size), expected);
    }
    assert_eq!(total_pages(0, PageSize::default()), 0);
}

#[test]
fn derive_is_idempotent() {
    for seed in 0..ITERATIONS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (items, size) = random_case(&mut rng);
        let page = rng.gen_range(0..=total_pages(items.len(), size) + 2);
        assert_eq!(derive(&items, size, page), derive(&items, size, page));
    }
}

#[test]
fn shrinking_past_the_end_resets_to_first_page() {
    for seed in 0..ITERATIONS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (items, size) = random_case(&mut rng);
        let mut session = PagingSession::new(size);
        session.view(&items);
        let pages = session.total_pages();
        if pages == 0 {
            continue;
        }
        session.set_page(rng.gen_range(1..=pages));
        let before = session.current_page();

        let keep = rng.gen_range(0..=items.len());
        let shrunk = &items[..keep];
        let view = session.view(shrunk);
        let new_total = total_pages(keep, size);

        if before > new_total && new_total > 0 {
            assert_eq!(session.current_page(), 1, "seed {seed}");
            assert_eq!(view.items, derive(shrunk, size, 1).items);
        } else {
            assert_eq!(session.current_page(), before, "seed {seed}");
        }
    }
}

#[test]
fn windows_stay_bounded_and_ordered() {
    for seed in 0..ITERATIONS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let total = rng.gen_range(0..=2_000);
        let current = if total == 0 { 1 } else { rng.gen_range(1..=total) };
        let tokens = compute_window(current, total);

        if total == 0 {
            assert!(tokens.is_empty());
            continue;
        }
        if total <= SHOW_PAGES + 2 {
            let flat: Vec<PageToken> = (1..=total).map(PageToken::Page).collect();
            assert_eq!(tokens.as_slice(), flat.as_slice());
            continue;
        }

        assert_eq!(tokens.first(), Some(&PageToken::Page(1)));
        assert_eq!(tokens.last(), Some(&PageToken::Page(total)));
        assert!(tokens.len() <= MAX_TOKENS, "seed {seed}: {tokens:?}");
        assert!(tokens.iter().filter(|t| t.is_ellipsis()).count() <= 2);
        assert!(tokens.contains(&PageToken::Page(current)));

        let numbers: Vec<usize> = tokens.iter().filter_map(|t| t.page()).collect();
        assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(
            tokens
                .windows(2)
                .all(|pair| !(pair[0].is_ellipsis() && pair[1].is_ellipsis()))
        );
    }
}
