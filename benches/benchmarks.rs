criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scanning_account_documents,
        rendering_account_documents,
        wrapping_paragraphs,
        evaluating_poker_hands,
        decomposing_figures,
        searching_snaking_words,
        exhausting_permutations,
        settling_stock_quotes,
        shortening_urls,
}

fn scanning_account_documents(c: &mut criterion::Criterion) {
    let document = Account::random().render();
    c.bench_function("scan a 9-digit account document", |b| {
        b.iter(|| Account::try_from(document.as_str()))
    });
}

fn rendering_account_documents(c: &mut criterion::Criterion) {
    let account = Account::random();
    c.bench_function("render an Account back to glyphs", |b| {
        b.iter(|| account.render())
    });
}

fn wrapping_paragraphs(c: &mut criterion::Criterion) {
    let text = "The String global object is a constructor for strings, or a sequence of characters.";
    c.bench_function("wrap a paragraph at 12 columns", |b| {
        b.iter(|| lines(text, 12).count())
    });
}

fn evaluating_poker_hands(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    c.bench_function("rank a 5-card Hand", |b| {
        b.iter(|| Evaluator::from(hand).find_ranking())
    });
}

fn decomposing_figures(c: &mut criterion::Criterion) {
    let figure = Figure::try_from(concat!(
        "+------------+\n",
        "|            |\n",
        "|            |\n",
        "|            |\n",
        "+------+-----+\n",
        "|      |     |\n",
        "|      |     |\n",
        "+------+-----+\n",
    ))
    .unwrap();
    c.bench_function("decompose a partitioned Figure", |b| {
        b.iter(|| figure.rectangles().count())
    });
}

fn searching_snaking_words(c: &mut criterion::Criterion) {
    let grid = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];
    let puzzle = Puzzle::try_from(grid.as_slice()).unwrap();
    c.bench_function("search a Puzzle for a snaking word", |b| {
        b.iter(|| puzzle.contains("UNDEFINED"))
    });
}

fn exhausting_permutations(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all orderings of 8 letters", |b| {
        b.iter(|| Permutations::from("abcdefgh").count())
    });
}

fn settling_stock_quotes(c: &mut criterion::Criterion) {
    let quotes = (0..1024).map(|n| n % 97).collect::<Vec<Price>>();
    c.bench_function("settle a 1024-day quote history", |b| {
        b.iter(|| most_profit(&quotes))
    });
}

fn shortening_urls(c: &mut criterion::Criterion) {
    let url = "https://en.wikipedia.org/wiki/URL_shortening";
    c.bench_function("shorten and restore a URL", |b| {
        b.iter(|| decode(&encode(url).unwrap()))
    });
}

use puzzlebox::cards::evaluator::Evaluator;
use puzzlebox::cards::hand::Hand;
use puzzlebox::figures::figure::Figure;
use puzzlebox::ocr::account::Account;
use puzzlebox::permute::permutations::Permutations;
use puzzlebox::shortener::codec::decode;
use puzzlebox::shortener::codec::encode;
use puzzlebox::snake::puzzle::Puzzle;
use puzzlebox::stocks::profit::most_profit;
use puzzlebox::wrap::lines::lines;
use puzzlebox::Arbitrary;
use puzzlebox::Price;
