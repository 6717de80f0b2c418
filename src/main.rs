fn main() {
    modify::term::main();
}
