//! Generates the CNF encoding of the "five houses" logic puzzle and prints
//! it in DIMACS form on stdout. Kept out of `src/` because CNF generation is
//! explicitly out of scope for the core library.

use cdcl_sat::clause::{Clause, Formula};
use cdcl_sat::dimacs::write_dimacs;
use cdcl_sat::literal::{Literal, Variable};

const SIZE: u32 = 5;

const RED: u32 = 0;
const GREEN: u32 = 1;
const WHITE: u32 = 2;
const BLUE: u32 = 3;
const YELLOW: u32 = 4;

const BRITISH: u32 = 5;
const SWEDISH: u32 = 6;
const DANISH: u32 = 7;
const NORWEGIAN: u32 = 8;
const GERMAN: u32 = 9;

const TEA: u32 = 10;
const COFFEE: u32 = 11;
const WATER: u32 = 12;
const BEER: u32 = 13;
const MILK: u32 = 14;

const PRINCE: u32 = 15;
const BLENDS: u32 = 16;
const PALLMALL: u32 = 17;
const BLUEMASTERS: u32 = 18;
const DUNHILL: u32 = 19;

const DOG: u32 = 20;
const CAT: u32 = 21;
const BIRD: u32 = 22;
const HORSE: u32 = 23;
const FISH: u32 = 24;

/// `category(house, property)` maps a (house, property) pair onto a DIMACS
/// variable id, matching `einstein.py`'s `foo = lambda a, b: a + size * b`.
fn category(house: u32, property: u32) -> Literal {
    Literal::new(Variable::new(house + SIZE * property), true)
}

fn neg(literal: Literal) -> Literal {
    literal.negate()
}

/// Each house has exactly one property from `[start, end]` in this category
/// (at-least-one, pairwise at-most-one).
fn generate_house(formula: &mut Formula, start: u32, end: u32) {
    for property in start..=end {
        let houses: Vec<Literal> = (1..=SIZE).map(|house| category(house, property)).collect();
        formula.add_original(Clause::new(houses));

        for h1 in 1..=SIZE {
            for h2 in 1..h1 {
                formula.add_original(Clause::new(vec![neg(category(h2, property)), neg(category(h1, property))]));
            }
            for other in start..=end {
                if other == property {
                    continue;
                }
                formula.add_original(Clause::new(vec![neg(category(h1, property)), neg(category(h1, other))]));
            }
        }
    }
}

/// The owner with `prop1` of `cat1` also has `prop2` of `cat2`, and vice
/// versa, in the same house.
fn pair_relationship(
    formula: &mut Formula,
    cat1: fn(u32, u32) -> Literal,
    prop1: u32,
    cat2: fn(u32, u32) -> Literal,
    prop2: u32,
) {
    for house in 1..=SIZE {
        formula.add_original(Clause::new(vec![neg(cat1(house, prop1)), cat2(house, prop2)]));
        formula.add_original(Clause::new(vec![cat1(house, prop1), neg(cat2(house, prop2))]));
    }
}

/// The owner with `prop1` of `cat1` lives directly next to an owner with
/// `prop2` of `cat2`.
fn neighbor(formula: &mut Formula, cat1: fn(u32, u32) -> Literal, prop1: u32, cat2: fn(u32, u32) -> Literal, prop2: u32) {
    formula.add_original(Clause::new(vec![neg(cat1(1, prop1)), cat2(2, prop2)]));
    formula.add_original(Clause::new(vec![neg(cat1(SIZE, prop1)), cat2(SIZE - 1, prop2)]));
    for house in 2..SIZE {
        formula.add_original(Clause::new(vec![
            neg(cat1(house, prop1)),
            cat2(house - 1, prop2),
            cat2(house + 1, prop2),
        ]));
    }
}

fn einstein() -> Formula {
    let mut formula = Formula::new();

    generate_house(&mut formula, RED, YELLOW);
    generate_house(&mut formula, BRITISH, GERMAN);
    generate_house(&mut formula, TEA, MILK);
    generate_house(&mut formula, PRINCE, DUNHILL);
    generate_house(&mut formula, DOG, FISH);

    // The Norwegian lives in the first house.
    formula.add_original(Clause::new(vec![category(1, NORWEGIAN)]));
    // The Norwegian lives next to the blue house.
    formula.add_original(Clause::new(vec![category(2, BLUE)]));
    // The man living in the center house drinks milk.
    formula.add_original(Clause::new(vec![category(3, MILK)]));

    // The Brit lives in the red house.
    pair_relationship(&mut formula, category, BRITISH, category, RED);
    // The green house's owner drinks coffee.
    pair_relationship(&mut formula, category, GREEN, category, COFFEE);
    // The Dane drinks tea.
    pair_relationship(&mut formula, category, DANISH, category, TEA);
    // The owner of the yellow house smokes Dunhill.
    pair_relationship(&mut formula, category, YELLOW, category, DUNHILL);
    // The Swede keeps dogs as pets.
    pair_relationship(&mut formula, category, SWEDISH, category, DOG);
    // The German smokes Prince.
    pair_relationship(&mut formula, category, GERMAN, category, PRINCE);
    // The person who smokes Pall Mall rears birds.
    pair_relationship(&mut formula, category, PALLMALL, category, BIRD);
    // The owner who smokes Bluemasters drinks beer.
    pair_relationship(&mut formula, category, BLUEMASTERS, category, BEER);

    // The man who keeps the horse lives next to the man who smokes Dunhill.
    neighbor(&mut formula, category, HORSE, category, DUNHILL);
    // The man who smokes Blends lives next to the one who keeps cats.
    neighbor(&mut formula, category, BLENDS, category, CAT);
    // The man who smokes Blends has a neighbor who drinks water.
    neighbor(&mut formula, category, BLENDS, category, WATER);

    // The green house is on the left of the white house.
    for white_house in 1..=SIZE as i32 {
        for green_house in (1..=SIZE as i32).rev() {
            if white_house - 1 <= green_house && green_house <= white_house {
                continue;
            }
            formula.add_original(Clause::new(vec![
                neg(category(white_house as u32, WHITE)),
                neg(category(green_house as u32, GREEN)),
            ]));
        }
    }

    formula
}

fn main() {
    let formula = einstein();
    let num_variables = (FISH as usize + 1) * SIZE as usize;
    print!("{}", write_dimacs(&formula, num_variables));
}
