/// Document generators for benchmarks and large-scale tests.
use std::fmt::Write;

/// Generate a Swagger 2.0 YAML document with `paths` path templates (two
/// operations each) and `definitions` object definitions.
///
/// Every fifth operation has no tags, definitions whose index is a multiple
/// of seven are never referenced, and every third path ends with a slash, so
/// most rules have something to report.
#[allow(dead_code)]
pub fn generate_document(paths: usize, definitions: usize) -> String {
    let definitions = definitions.max(1);
    let mut out = String::from("swagger: \"2.0\"\ninfo:\n  title: generated\n  version: \"1\"\npaths:\n");

    for i in 0..paths {
        let slash = if i % 3 == 0 { "/" } else { "" };
        writeln!(out, "  /resource-{i}/{{itemId}}{slash}:").unwrap();
        for (verb, n) in [("get", 2 * i), ("put", 2 * i + 1)] {
            let target = live_definition(n, definitions);
            writeln!(out, "    {verb}:").unwrap();
            writeln!(out, "      operationId: {verb}Resource{i}").unwrap();
            writeln!(out, "      description: operation {n}").unwrap();
            if n % 5 != 0 {
                writeln!(out, "      tags: [resources]").unwrap();
            }
            writeln!(out, "      parameters:").unwrap();
            writeln!(out, "        - name: itemId").unwrap();
            writeln!(out, "          in: path").unwrap();
            writeln!(out, "          required: true").unwrap();
            writeln!(out, "          type: string").unwrap();
            writeln!(out, "      responses:").unwrap();
            writeln!(out, "        \"200\":").unwrap();
            writeln!(out, "          description: ok").unwrap();
            writeln!(out, "          schema:").unwrap();
            writeln!(out, "            $ref: \"#/definitions/Model{target}\"").unwrap();
        }
    }

    writeln!(out, "definitions:").unwrap();
    for d in 0..definitions {
        writeln!(out, "  Model{d}:").unwrap();
        writeln!(out, "    type: object").unwrap();
        writeln!(out, "    required: [id, missing{d}]").unwrap();
        writeln!(out, "    properties:").unwrap();
        writeln!(out, "      id:").unwrap();
        writeln!(out, "        type: string").unwrap();
        writeln!(out, "        description: identifier").unwrap();
        writeln!(out, "      display_name:").unwrap();
        writeln!(out, "        type: string").unwrap();
    }
    out
}

/// Index of the definition operation `n` responds with; multiples of seven
/// are skipped.
fn live_definition(n: usize, definitions: usize) -> usize {
    let live: Vec<usize> = (0..definitions).filter(|d| d % 7 != 0).collect();
    if live.is_empty() {
        0
    } else {
        live[n % live.len()]
    }
}
