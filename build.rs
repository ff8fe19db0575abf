fn main() {
    // WIFI_SSID / WIFI_PASSWORD may live in a git-ignored `.env`
    dotenv_build::output(dotenv_build::Config::default()).unwrap();
    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASSWORD");

    println!("cargo:rustc-link-arg-bins=-nostartfiles");
    println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
}
