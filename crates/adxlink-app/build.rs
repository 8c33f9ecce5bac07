fn main() {
    slint_build::compile("ui/plot.slint").unwrap();
}
