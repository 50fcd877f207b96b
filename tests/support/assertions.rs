use fundflow::domain::{Amount, Person};

pub fn assert_balance(person: &Person, expected: Amount) {
    assert_eq!(
        person.wallet().balance(),
        expected,
        "{} holds {}, expected {}",
        person.name(),
        person.wallet().balance(),
        expected
    );
}

pub fn assert_balances(people: &[&Person], expected: &[Amount]) {
    assert_eq!(people.len(), expected.len(), "one expected balance per person");
    for (person, amount) in people.iter().zip(expected) {
        assert_balance(person, *amount);
    }
}
