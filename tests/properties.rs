//! Checks solver output against a brute-force enumeration of every simple path on small random
//! boards.

use std::collections::HashSet;

use boggle::{Adjacency, Board, BoggleSolver, Dimensions, GridBoard, MIN_WORD_LENGTH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A small alphabet so that random boards and random words actually overlap.
const LETTERS: &[char] = &['A', 'E', 'Q', 'R', 'S', 'T', 'U'];

const MAX_WORD_LENGTH: usize = 7;

fn spell(letter: char) -> &'static str {
    match letter {
        'A' => "A",
        'E' => "E",
        'Q' => "QU",
        'R' => "R",
        'S' => "S",
        'T' => "T",
        'U' => "U",
        _ => unreachable!(),
    }
}

fn random_board(rng: &mut StdRng, rows: usize, cols: usize) -> GridBoard {
    let letters = (0..rows * cols).map(|_| LETTERS[rng.gen_range(0..LETTERS.len())]).collect();
    GridBoard::new(rows, cols, letters).unwrap()
}

/// Some random strings, plus some strings read off random walks so the board has hits.
fn random_dictionary(rng: &mut StdRng, board: &GridBoard) -> Vec<String> {
    let dimensions = board.dimensions();
    let adjacency = Adjacency::new(dimensions);
    let mut words = vec![];

    for _ in 0..60 {
        let length = rng.gen_range(1..=MAX_WORD_LENGTH);
        words.push((0..length).map(|_| LETTERS[rng.gen_range(0..LETTERS.len())]).collect());
    }

    for _ in 0..30 {
        let mut cell = rng.gen_range(0..dimensions.cell_count());
        let mut path = vec![cell];
        let steps = rng.gen_range(1..5);
        for _ in 0..steps {
            let options: Vec<_> =
                adjacency.neighbors(cell).iter().copied().filter(|n| !path.contains(n)).collect();
            if options.is_empty() {
                break;
            }
            cell = options[rng.gen_range(0..options.len())];
            path.push(cell);
        }
        words.push(path.iter().map(|&c| spell(board.letters()[c])).collect());
    }

    words
}

/// Every dictionary word of at least `MIN_WORD_LENGTH` letters spelled by some simple path. Paths
/// are only cut off once they stop being a prefix of any dictionary word.
fn brute_force(board: &GridBoard, dictionary: &HashSet<String>) -> HashSet<String> {
    fn extend(
        board: &GridBoard,
        adjacency: &Adjacency,
        (dictionary, prefixes): (&HashSet<String>, &HashSet<String>),
        path: &mut Vec<usize>,
        word: &mut String,
        found: &mut HashSet<String>,
    ) {
        if !prefixes.contains(word.as_str()) {
            return;
        }
        if word.len() >= MIN_WORD_LENGTH && dictionary.contains(word.as_str()) {
            found.insert(word.clone());
        }

        let &cell = path.last().unwrap();
        for &next in adjacency.neighbors(cell) {
            if path.contains(&next) {
                continue;
            }
            let letters = spell(board.letters()[next]);
            path.push(next);
            word.push_str(letters);
            extend(board, adjacency, (dictionary, prefixes), path, word, found);
            word.truncate(word.len() - letters.len());
            path.pop();
        }
    }

    let prefixes: HashSet<String> = dictionary
        .iter()
        .flat_map(|word| (1..=word.len()).map(move |end| word[..end].to_string()))
        .collect();

    let adjacency = Adjacency::new(board.dimensions());
    let mut found = HashSet::new();
    for start in board.dimensions().cells() {
        let mut path = vec![start];
        let mut word = spell(board.letters()[start]).to_string();
        extend(board, &adjacency, (dictionary, &prefixes), &mut path, &mut word, &mut found);
    }
    found
}

#[test]
fn test_solver_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let shapes = [(1, 1), (1, 6), (5, 1), (2, 2), (2, 4), (3, 3), (3, 4)];

    for round in 0..40 {
        let (rows, cols) = shapes[round % shapes.len()];
        let board = random_board(&mut rng, rows, cols);
        let dictionary = random_dictionary(&mut rng, &board);
        let dictionary_set: HashSet<String> = dictionary.iter().cloned().collect();

        let solver = BoggleSolver::new(&dictionary).unwrap();
        let words = solver.all_valid_words(&board).unwrap();
        let unique: HashSet<String> = words.iter().cloned().collect();

        assert_eq!(unique.len(), words.len(), "duplicate words on\n{}", board);
        assert!(words.iter().all(|w| w.len() >= MIN_WORD_LENGTH));
        assert!(words.iter().all(|w| dictionary_set.contains(w)));
        assert_eq!(unique, brute_force(&board, &dictionary_set), "mismatch on\n{}", board);

        // The trie must come back clean: solving again gives the same answer in the same order.
        assert_eq!(solver.all_valid_words(&board).unwrap(), words);

        for word in &words {
            assert_eq!(solver.score_of(word).unwrap(), boggle::score_for_length(word.len()));
        }
    }
}

#[test]
fn test_adjacency_matches_king_moves() {
    for (rows, cols) in [(2, 2), (3, 3), (4, 5), (6, 2)] {
        let dimensions = Dimensions::new(rows, cols).unwrap();
        let adjacency = Adjacency::new(dimensions);

        for a in dimensions.cells() {
            for b in dimensions.cells() {
                let (ar, ac) = dimensions.coord(a);
                let (br, bc) = dimensions.coord(b);
                let king = a != b && ar.abs_diff(br) <= 1 && ac.abs_diff(bc) <= 1;
                assert_eq!(adjacency.neighbors(a).contains(&b), king, "{:?} {:?}", (ar, ac), (br, bc));
            }
        }
    }
}

#[test]
fn test_board_trait_objects() {
    let board = GridBoard::from_rows(&["CA", "TS"]).unwrap();
    let dynamic: &dyn Board = &board;

    let solver = BoggleSolver::new(["CAT"]).unwrap();
    assert_eq!(solver.all_valid_words(dynamic).unwrap(), vec!["CAT"]);
}
