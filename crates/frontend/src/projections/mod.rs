pub mod p900_profit;
