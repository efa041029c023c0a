use btp2boolesim::{RcRegistry, RcSpecs, RegulatoryNetwork, RuleCompiler, DEFAULT_RC_CODE};
use std::process::exit;

/// Compile a `.sif` regulatory network (plus an optional RC-specification file)
/// into BooleSim update rules on stdout, one `node = rule` line per regulated
/// node.
fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: btp2boolesim <network.sif> [rc-specs.tsv]");
        exit(2);
    }

    let sif_string = read_file(&args[1]);
    let network = match RegulatoryNetwork::try_from_sif(&sif_string) {
        Ok(network) => network,
        Err(error) => fail(&error.to_string()),
    };

    let specs = if args.len() == 3 {
        let spec_string = read_file(&args[2]);
        match RcSpecs::try_from_tsv(&spec_string) {
            Ok(specs) => specs,
            Err(error) => fail(&error.to_string()),
        }
    } else {
        RcSpecs::new()
    };

    let registry = RcRegistry::default();
    let compiler = RuleCompiler::new(&network, &registry, DEFAULT_RC_CODE);
    match compiler.compile_all(&specs) {
        Ok(rules) => {
            for (node, rule) in rules {
                println!("{} = {}", network.get_node_name(node), rule);
            }
        }
        Err(error) => fail(&error.to_string()),
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => fail(&format!("Cannot read `{}`: {}", path, error)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    exit(1);
}
