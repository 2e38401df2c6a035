// Full report output, checked byte-for-byte

use budget_ledger::{create_spend_chart, BudgetError, Category};
use rust_decimal_macros::dec;

#[test]
fn test_food_ledger_printout() {
    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");

    food.deposit(dec!(1000), "deposit");
    assert!(food.withdraw(dec!(10.15), "groceries"));
    assert!(food.withdraw(dec!(15.89), "restaurant and more food for dessert"));
    assert!(food.transfer(dec!(50), &mut clothing));

    let expected = "*************Food*************\n\
                    deposit                1000.00\n\
                    groceries               -10.15\n\
                    restaurant and more foo -15.89\n\
                    Transfer to Clothing    -50.00\n\
                    Total: 923.96";
    assert_eq!(food.to_string(), expected);

    let expected_clothing = "***********Clothing***********\n\
                             Transfer from Food       50.00\n\
                             Total: 50";
    assert_eq!(clothing.to_string(), expected_clothing);
}

#[test]
fn test_spend_chart_three_categories() {
    let mut food = Category::new("Food");
    let mut entertainment = Category::new("Entertainment");
    let mut business = Category::new("Business");

    food.deposit(dec!(900), "deposit");
    entertainment.deposit(dec!(900), "deposit");
    business.deposit(dec!(900), "deposit");
    assert!(food.withdraw(dec!(105.55), ""));
    assert!(entertainment.withdraw(dec!(33.40), ""));
    assert!(business.withdraw(dec!(10.99), ""));

    let expected = [
        "Percentage spent by category",
        "100|          ",
        " 90|          ",
        " 80|          ",
        " 70|    o     ",
        " 60|    o     ",
        " 50|    o     ",
        " 40|    o     ",
        " 30|    o     ",
        " 20|    o  o  ",
        " 10|    o  o  ",
        "  0| o  o  o  ",
        "    ----------",
        "     B  F  E  ",
        "     u  o  n  ",
        "     s  o  t  ",
        "     i  d  e  ",
        "     n     r  ",
        "     e     t  ",
        "     s     a  ",
        "     s     i  ",
        "           n  ",
        "           m  ",
        "           e  ",
        "           n  ",
        "           t  ",
    ]
    .join("\n");

    let chart = create_spend_chart([&business, &food, &entertainment]).unwrap();
    assert_eq!(chart, expected);
}

#[test]
fn test_spend_chart_requires_a_withdrawal() {
    let mut food = Category::new("Food");
    let mut auto = Category::new("Auto");
    food.deposit(dec!(100), "deposit");
    auto.deposit(dec!(100), "deposit");

    assert_eq!(
        create_spend_chart([&food, &auto]),
        Err(BudgetError::NoWithdrawals)
    );
}

#[test]
fn test_failed_transfer_leaves_both_ledgers_alone() {
    let mut food = Category::new("Food");
    let mut business = Category::new("Business");
    food.deposit(dec!(100), "deposit");

    assert!(!food.transfer(dec!(200), &mut business));
    assert_eq!(food.ledger().len(), 1);
    assert!(business.ledger().is_empty());
    assert_eq!(food.get_balance(), dec!(100));
}
