
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod events_test;
    pub mod fees_test;
    pub mod ft_receiver_test;
    pub mod loyalty_test;
    pub mod payout_test;
    pub mod product_test;
    pub mod purchase_test;
    pub mod resale_test;
    pub mod validation_test;
}
