mod common;

use campus_pay::domain::amount::Amount;
use campus_pay::domain::catalog::ServiceCategory;
use campus_pay::domain::checkout::{
    CheckoutEvent, CheckoutState, CheckoutStep, Effect, MpesaStage,
};
use campus_pay::domain::payment::PaymentMethod;

/// Event prefixes that leave the checkout in each reachable step.
fn paths() -> Vec<Vec<CheckoutEvent>> {
    let to_summary = vec![
        CheckoutEvent::SelectCategory(ServiceCategory::Cafeteria),
        CheckoutEvent::ToggleItem("custom-meal".to_string()),
        CheckoutEvent::SetCustomAmount {
            item: "custom-meal".to_string(),
            amount: Amount(800),
        },
        CheckoutEvent::SetDescription("snack".to_string()),
        CheckoutEvent::Proceed,
    ];
    let bank = [
        to_summary.clone(),
        vec![
            CheckoutEvent::ChooseMethod(PaymentMethod::Bank),
            CheckoutEvent::ConfirmBankPayment,
        ],
    ]
    .concat();
    let mpesa_chosen = [
        to_summary.clone(),
        vec![CheckoutEvent::ChooseMethod(PaymentMethod::Mpesa)],
    ]
    .concat();
    let stk_push = [
        mpesa_chosen.clone(),
        vec![CheckoutEvent::SubmitPhone("0712345678".to_string())],
    ]
    .concat();
    // Tickets count up from 1 on a fresh state.
    let pin_entry = [stk_push.clone(), vec![CheckoutEvent::TimerElapsed(1)]].concat();
    let processing = [
        pin_entry.clone(),
        vec![CheckoutEvent::SubmitPin("1234".to_string())],
    ]
    .concat();
    let confirm_pin = [processing.clone(), vec![CheckoutEvent::TimerElapsed(2)]].concat();
    let mpesa_success = [
        confirm_pin.clone(),
        vec![CheckoutEvent::SubmitPin("1234".to_string())],
    ]
    .concat();

    vec![
        vec![],
        to_summary[..1].to_vec(),
        to_summary[..4].to_vec(),
        to_summary.clone(),
        bank,
        mpesa_chosen,
        stk_push,
        pin_entry,
        processing,
        confirm_pin,
        mpesa_success,
    ]
}

fn replay(path: Vec<CheckoutEvent>) -> CheckoutState {
    let mut state = CheckoutState::new();
    for event in path {
        state.apply(event).unwrap();
    }
    state
}

fn assert_pristine(state: &CheckoutState) {
    assert_eq!(state.step(), CheckoutStep::Browsing);
    assert_eq!(state.category(), None);
    assert!(state.selection().is_empty());
    assert_eq!(state.selection().draft_of("custom-meal"), None);
    assert_eq!(state.description(), "");
    assert_eq!(state.method(), None);
    assert_eq!(state.phone_number(), "");
    assert_eq!(state.pending(), None);
    assert_eq!(state.total(), Amount::ZERO);
}

#[test]
fn test_reset_from_every_step_clears_everything() {
    for path in paths() {
        let mut state = replay(path);
        state.apply(CheckoutEvent::Reset).unwrap();
        assert_pristine(&state);

        state.apply(CheckoutEvent::Reset).unwrap();
        assert_pristine(&state);
    }
}

#[test]
fn test_paths_reach_every_payment_step() {
    let steps: Vec<CheckoutStep> = paths().into_iter().map(|p| replay(p).step()).collect();
    for expected in [
        CheckoutStep::MethodChosen(PaymentMethod::Bank),
        CheckoutStep::MethodChosen(PaymentMethod::Mpesa),
        CheckoutStep::Simulating(MpesaStage::StkPushSent),
        CheckoutStep::Simulating(MpesaStage::PinEntry),
        CheckoutStep::Simulating(MpesaStage::Processing),
        CheckoutStep::Simulating(MpesaStage::ConfirmPin),
        CheckoutStep::Success,
    ] {
        assert!(steps.contains(&expected), "{expected} not reached");
    }
}

#[test]
fn test_dismiss_from_payment_modals_returns_to_items() {
    for path in paths() {
        let mut state = replay(path);
        if !matches!(
            state.step(),
            CheckoutStep::MethodChosen(_) | CheckoutStep::Simulating(_)
        ) {
            continue;
        }
        let pending = state.pending();
        let effects = state.apply(CheckoutEvent::Dismiss).unwrap();

        assert_eq!(state.step(), CheckoutStep::ItemSelection);
        assert_eq!(state.pending(), None);
        assert_eq!(state.method(), None);
        assert_eq!(state.phone_number(), "");
        assert_eq!(state.total(), Amount(800));
        match pending {
            Some(timer) => assert_eq!(effects, vec![Effect::Cancel(timer.ticket)]),
            None => assert!(effects.is_empty()),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_reset_from_success_clears_everything() {
    let (mut session, _) = common::session();
    common::dispatch_all(&mut session, paths().remove(4)).await;
    session.settle().await.unwrap();
    assert_eq!(session.state().step(), CheckoutStep::Success);

    session.dispatch(CheckoutEvent::Reset).await.unwrap();
    assert_pristine(session.state());
}
