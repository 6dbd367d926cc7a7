use crate::known_types;

use super::TemplateParams;

/// Generate the main ViewModel file
pub fn render_view_model(params: &TemplateParams) -> String {
    let initial_value = known_types::initial_value(&params.state_type);

    format!(
        r#"import 'package:ease_state_helper/ease_state_helper.dart';

part '{file_name}.ease.dart';

class {class_name} extends StateNotifier<{state_type}> {{
  {class_name}() : super({initial_value});
}}
"#,
        file_name = params.file_name,
        class_name = params.class_name,
        state_type = params.state_type,
        initial_value = initial_value,
    )
}
