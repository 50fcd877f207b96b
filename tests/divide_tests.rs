//! Wallet division among people sharing the divider's currency.

mod support;

use fundflow::domain::{Currency, FundError, Person};
use fundflow::testkit::domain::{person, total};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use support::assertions::{assert_balance, assert_balances};

#[test]
fn division_among_same_currency_persons() {
    let mut john = person("John Doe", Currency::Eur, dec!(100));
    let mut jane = person("Jane Doe", Currency::Eur, dec!(0));
    let mut jack = person("Jack Doe", Currency::Eur, dec!(0));

    let plan = john.divide_wallet([&mut jane, &mut jack]).unwrap();

    assert_eq!(plan.share(), dec!(33.33));
    assert_eq!(plan.recipients(), 2);
    assert_balances(&[&jane, &jack, &john], &[dec!(33.33), dec!(33.33), dec!(33.34)]);
    assert_eq!(total([&john, &jane, &jack]), dec!(100));
}

#[test]
fn division_skips_different_currency_persons() {
    let mut john = person("John Doe", Currency::Eur, dec!(100));
    let mut jane = person("Jane Doe", Currency::Usd, dec!(0));
    let mut jack = person("Jack Doe", Currency::Eur, dec!(0));

    john.divide_wallet([&mut jane, &mut jack]).unwrap();

    assert_balances(&[&jane, &jack, &john], &[dec!(0), dec!(50), dec!(50)]);
}

#[test]
fn division_with_no_other_persons_is_a_no_op() {
    let mut john = person("John Doe", Currency::Eur, dec!(100));

    let plan = john.divide_wallet(Vec::<&mut Person>::new()).unwrap();

    assert_eq!(plan.recipients(), 0);
    assert_eq!(plan.distributed(), dec!(0));
    assert_balance(&john, dec!(100));
}

#[test]
fn division_of_empty_wallet_fails() {
    let mut john = person("John Doe", Currency::Eur, dec!(0));
    let mut jane = person("Jane Doe", Currency::Eur, dec!(7));

    let err = john.divide_wallet([&mut jane]).unwrap_err();

    assert!(matches!(err, FundError::InsufficientFunds { .. }));
    assert_balances(&[&john, &jane], &[dec!(0), dec!(7)]);
}

#[test]
fn recipients_keep_their_existing_balance() {
    let mut john = person("John Doe", Currency::Usd, dec!(10));
    let mut jane = person("Jane Doe", Currency::Usd, dec!(2.50));
    let mut jack = person("Jack Doe", Currency::Usd, dec!(0));
    let mut jill = person("Jill Doe", Currency::Usd, dec!(1));
    let before = total([&john, &jane, &jack, &jill]);

    john.divide_wallet([&mut jane, &mut jack, &mut jill]).unwrap();

    // 10 / 4 = 2.50 each
    assert_balances(
        &[&john, &jane, &jack, &jill],
        &[dec!(2.50), dec!(5.00), dec!(2.50), dec!(3.50)],
    );
    assert_eq!(total([&john, &jane, &jack, &jill]), before);
}

#[test]
fn division_over_a_slice_of_people() {
    let mut john = person("John Doe", Currency::Gbp, dec!(1));
    let mut group: Vec<Person> = (0..5)
        .map(|i| person(&format!("guest-{i}"), Currency::Gbp, dec!(0)))
        .collect();

    john.divide_wallet(group.iter_mut()).unwrap();

    // 1 / 6 = 0.1666.. truncated to 0.16; 0.20 stays with the divider
    for guest in &group {
        assert_balance(guest, dec!(0.16));
    }
    assert_balance(&john, dec!(0.20));
    assert_eq!(total(group.iter().chain([&john])), dec!(1));
}

#[test]
fn division_is_refused_when_a_share_would_overflow() {
    let mut john = person("John Doe", Currency::Eur, dec!(100));
    let mut jane = person("Jane Doe", Currency::Eur, dec!(0));
    let mut jack = person("Jack Doe", Currency::Eur, Decimal::MAX);

    let err = john.divide_wallet([&mut jane, &mut jack]).unwrap_err();

    assert!(matches!(err, FundError::BalanceOverflow { .. }));
    assert_balances(&[&john, &jane, &jack], &[dec!(100), dec!(0), Decimal::MAX]);
}
