pub mod a001_category;
pub mod a002_product;
pub mod a003_customer;
pub mod a004_purchase;
pub mod a005_sale;
pub mod a006_powder_coating;
pub mod a007_transport;
pub mod a008_employee;
pub mod common;
