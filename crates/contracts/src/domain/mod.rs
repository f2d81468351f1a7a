pub mod a001_wifi_policy;
