pub mod a030_courier;
