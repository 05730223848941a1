pub mod bowyer_watson;
