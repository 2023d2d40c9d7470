#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use plat_solver::Parcel;
use plat_solver::Plat;
use plat_solver::SubdivisionError;
use plat_solver::pricing::PriceTable;
use plat_solver::pricing::Pricing;
use plat_solver::solvers::ExactSearch;
use plat_solver::solvers::ExhaustiveSearch;
use plat_solver::solvers::GreedySearch;
use plat_solver::solvers::SubdivisionProcedure;

/// A table where small parcels are nearly worthless and one corner price is
/// huge, so single-level estimates mislead the greedy search.
fn gap_pricing() -> Pricing {
    let table = PriceTable::from_rows(vec![vec![1, 2, 60], vec![1, 1, 50], vec![100, 0, 10]])
        .expect("rectangular rows");

    Pricing::new(table, 1)
}

fn assert_tiles_parent(parcel: &Parcel) {
    let Some(subdivision) = parcel.subdivision() else {
        return;
    };

    let left = subdivision.left();
    let right = subdivision.right();

    let is_vertical = left.height() == parcel.height()
        && right.height() == parcel.height()
        && left.width() + right.width() == parcel.width();
    let is_horizontal = left.width() == parcel.width()
        && right.width() == parcel.width()
        && left.height() + right.height() == parcel.height();
    assert!(
        is_vertical || is_horizontal,
        "a {}m x {}m parcel is split into {}m x {}m and {}m x {}m",
        parcel.width(),
        parcel.height(),
        left.width(),
        left.height(),
        right.width(),
        right.height(),
    );

    assert_tiles_parent(left);
    assert_tiles_parent(right);
}

fn assert_plat_is_consistent(plat: &Plat, pricing: &Pricing) {
    assert_tiles_parent(&plat.parcel);

    let recomputed = plat.parcel.value(pricing).expect("priced plat");
    assert_eq!(plat.value, recomputed);
}

#[test]
fn exhaustive_and_exact_agree_on_small_plots() {
    let pricing = Pricing::standard();

    for width in 1..=4 {
        for height in 1..=4 {
            let exhaustive_plat = ExhaustiveSearch::default()
                .optimise(&pricing, width, height)
                .expect("plot in range");
            let exact_plat = ExactSearch::default()
                .optimise(&pricing, width, height)
                .expect("plot in range");

            assert_eq!(
                exhaustive_plat.value, exact_plat.value,
                "the methods disagree on a {width}m x {height}m plot"
            );
        }
    }

    let gap = gap_pricing();
    let exhaustive_plat = ExhaustiveSearch::default()
        .optimise(&gap, 3, 3)
        .expect("plot in range");
    let exact_plat = ExactSearch::default()
        .optimise(&gap, 3, 3)
        .expect("plot in range");
    assert_eq!(exhaustive_plat.value, 294);
    assert_eq!(exact_plat.value, 294);
}

#[test]
fn greedy_never_beats_the_exact_value() {
    let pricing = Pricing::standard();

    for width in 1..=6 {
        for height in 1..=6 {
            let greedy_plat = GreedySearch::default()
                .optimise(&pricing, width, height)
                .expect("plot in range");
            let exact_plat = ExactSearch::default()
                .optimise(&pricing, width, height)
                .expect("plot in range");

            assert!(
                greedy_plat.value <= exact_plat.value,
                "greedy finds {} on a {width}m x {height}m plot, the optimum is {}",
                greedy_plat.value,
                exact_plat.value,
            );
        }
    }
}

#[test]
fn greedy_can_fall_short_of_the_optimum() {
    let standard = Pricing::standard();
    let greedy_plat = GreedySearch::default()
        .optimise(&standard, 6, 6)
        .expect("plot in range");
    let exact_plat = ExactSearch::default()
        .optimise(&standard, 6, 6)
        .expect("plot in range");
    assert_eq!(greedy_plat.value, 1140);
    assert_eq!(exact_plat.value, 1160);

    let gap = gap_pricing();
    let greedy_plat = GreedySearch::default()
        .optimise(&gap, 3, 3)
        .expect("plot in range");
    let exact_plat = ExactSearch::default()
        .optimise(&gap, 3, 3)
        .expect("plot in range");
    assert_eq!(greedy_plat.value, 174);
    assert_eq!(exact_plat.value, 294);
}

#[test]
fn repeated_optimisation_returns_the_same_plat() {
    let pricing = Pricing::standard();

    let mut exhaustive = ExhaustiveSearch::default();
    let first = exhaustive.optimise(&pricing, 3, 3).expect("plot in range");
    let second = exhaustive.optimise(&pricing, 3, 3).expect("plot in range");
    assert_eq!(first, second);

    let mut greedy = GreedySearch::default();
    let first = greedy.optimise(&pricing, 6, 6).expect("plot in range");
    let second = greedy.optimise(&pricing, 6, 6).expect("plot in range");
    assert_eq!(first, second);

    let mut exact = ExactSearch::default();
    let first = exact.optimise(&pricing, 6, 6).expect("plot in range");
    let second = exact.optimise(&pricing, 6, 6).expect("plot in range");
    assert_eq!(first, second);
}

#[test]
fn optimal_plats_tile_the_plot_and_price_consistently() {
    let standard = Pricing::standard();
    let gap = gap_pricing();

    for (pricing, width, height) in [(&standard, 3, 3), (&gap, 3, 3)] {
        let plat = ExhaustiveSearch::default()
            .optimise(pricing, width, height)
            .expect("plot in range");
        assert_plat_is_consistent(&plat, pricing);
    }

    for (pricing, width, height) in [(&standard, 6, 6), (&gap, 3, 3)] {
        let plat = GreedySearch::default()
            .optimise(pricing, width, height)
            .expect("plot in range");
        assert_plat_is_consistent(&plat, pricing);

        let plat = ExactSearch::default()
            .optimise(pricing, width, height)
            .expect("plot in range");
        assert_plat_is_consistent(&plat, pricing);
    }
}

#[test]
fn a_single_square_metre_plot_is_left_whole() {
    let pricing = Pricing::standard();

    let exhaustive_plat = ExhaustiveSearch::default()
        .optimise(&pricing, 1, 1)
        .expect("plot in range");
    let greedy_plat = GreedySearch::default()
        .optimise(&pricing, 1, 1)
        .expect("plot in range");
    let exact_plat = ExactSearch::default()
        .optimise(&pricing, 1, 1)
        .expect("plot in range");

    for plat in [&exhaustive_plat, &greedy_plat, &exact_plat] {
        assert_eq!(plat.value, 20);
        assert!(plat.parcel.is_whole());
    }
}

#[test]
fn the_description_covers_every_parcel_in_the_plat() {
    let pricing = Pricing::standard();
    let plat = ExactSearch::default()
        .optimise(&pricing, 6, 6)
        .expect("plot in range");

    let description = plat.parcel.describe(&pricing).expect("priced plat");
    assert_eq!(
        description,
        "6m x 6m, benefit 1400, cost 240, value 1160\n\
         LEFT: 3m x 6m, benefit 700, cost 60, value 640\n\
         LEFT: LEFT: 3m x 3m, benefit 350, cost 0, value 350\n\
         LEFT: RIGHT: 3m x 3m, benefit 350, cost 0, value 350\n\
         RIGHT: 3m x 6m, benefit 700, cost 60, value 640\n\
         RIGHT: LEFT: 3m x 3m, benefit 350, cost 0, value 350\n\
         RIGHT: RIGHT: 3m x 3m, benefit 350, cost 0, value 350\n"
    );
}

#[test]
fn degenerate_plots_are_rejected_up_front() {
    let pricing = Pricing::standard();

    assert_eq!(
        ExactSearch::default().optimise(&pricing, 0, 5),
        Err(SubdivisionError::EmptyPlot {
            width: 0,
            height: 5
        })
    );
    assert_eq!(
        GreedySearch::default().optimise(&pricing, 7, 6),
        Err(SubdivisionError::PlotTooLarge {
            width: 7,
            height: 6,
            max_width: 6,
            max_height: 6
        })
    );
}
