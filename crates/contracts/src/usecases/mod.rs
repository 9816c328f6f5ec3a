pub mod u501_combined_purchase_sale;
