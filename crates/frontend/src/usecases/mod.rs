pub mod u501_checkout;
