use crate::naming::to_camel_case;

use super::TemplateParams;

/// Generate the `.ease.dart` companion file
///
/// Produces the aspect, provider, inherited model and `BuildContext`
/// extension that wire a ViewModel into the widget tree.
pub fn render_companion(params: &TemplateParams) -> String {
    let mut out = String::new();

    out.push_str(&format!("part of '{}.dart';\n\n", params.file_name));
    out.push_str(&render_aspect(params));
    out.push('\n');
    out.push_str(&render_provider(params));
    out.push('\n');
    out.push_str(&render_inherited(params));
    out.push('\n');
    out.push_str(&render_context_extension(params));

    out
}

/// Selector plus last seen value, used to decide whether a dependent rebuilds
fn render_aspect(params: &TemplateParams) -> String {
    format!(
        r#"class _{class_name}Aspect<T> {{
  final T Function({state_type} state) selector;
  final T value;
  final bool Function(T a, T b)? equals;

  const _{class_name}Aspect(this.selector, this.value, [this.equals]);

  bool hasChanged(T newValue) {{
    if (equals != null) return !equals!(value, newValue);
    return value != newValue;
  }}
}}
"#,
        class_name = params.class_name,
        state_type = params.state_type,
    )
}

fn render_provider(params: &TemplateParams) -> String {
    format!(
        r#"class {class_name}Provider extends StatefulWidget {{
  final Widget child;
  const {class_name}Provider({{super.key, required this.child}});

  @override
  State<{class_name}Provider> createState() => _{class_name}ProviderState();
}}

class _{class_name}ProviderState extends State<{class_name}Provider> {{
  late final {class_name} _notifier = {class_name}();

  @override
  void initState() {{
    super.initState();
    _notifier.addListener(_onStateChange);
  }}

  @override
  void dispose() {{
    _notifier.removeListener(_onStateChange);
    _notifier.dispose();
    super.dispose();
  }}

  void _onStateChange() => setState(() {{}});

  @override
  Widget build(BuildContext context) {{
    return _{class_name}Inherited(notifier: _notifier, child: widget.child);
  }}
}}
"#,
        class_name = params.class_name,
    )
}

fn render_inherited(params: &TemplateParams) -> String {
    format!(
        r#"class _{class_name}Inherited extends InheritedModel<_{class_name}Aspect> {{
  final {class_name} notifier;

  const _{class_name}Inherited({{required this.notifier, required super.child}});

  @override
  bool updateShouldNotify(_{class_name}Inherited oldWidget) => true;

  @override
  bool updateShouldNotifyDependent(
    _{class_name}Inherited oldWidget,
    Set<_{class_name}Aspect> dependencies,
  ) {{
    if (dependencies.isEmpty) return true;
    for (final aspect in dependencies) {{
      if (aspect.hasChanged(aspect.selector(notifier.state))) return true;
    }}
    return false;
  }}
}}
"#,
        class_name = params.class_name,
    )
}

/// `get`, `read`, `select` and `listenOn` accessors on `BuildContext`
fn render_context_extension(params: &TemplateParams) -> String {
    let guard = missing_provider_guard(&params.class_name);

    format!(
        r#"extension {class_name}Context on BuildContext {{
  {class_name} get {getter_name} {{
    final inherited = InheritedModel.inheritFrom<_{class_name}Inherited>(this);
{guard}    return inherited.notifier;
  }}

  {class_name} read{class_name}() {{
    final inherited = getInheritedWidgetOfExactType<_{class_name}Inherited>();
{guard}    return inherited.notifier;
  }}

  T select{class_name}<T>(
    T Function({state_type} state) selector, {{
    bool Function(T a, T b)? equals,
  }}) {{
    final inherited = getInheritedWidgetOfExactType<_{class_name}Inherited>();
{guard}    final currentValue = selector(inherited.notifier.state);
    InheritedModel.inheritFrom<_{class_name}Inherited>(
      this,
      aspect: _{class_name}Aspect<T>(selector, currentValue, equals),
    );
    return currentValue;
  }}

  EaseSubscription listenOn{class_name}(
    void Function({state_type} previous, {state_type} current) listener, {{
    bool fireImmediately = false,
  }}) {{
    return read{class_name}().listenInContext(
      this,
      listener,
      fireImmediately: fireImmediately,
    );
  }}
}}
"#,
        class_name = params.class_name,
        state_type = params.state_type,
        getter_name = to_camel_case(&params.class_name),
        guard = guard,
    )
}

/// Null check thrown when no provider for the ViewModel is above the context
fn missing_provider_guard(class_name: &str) -> String {
    format!(
        r#"    if (inherited == null) {{
      throw StateError(
        'No {class_name} found in widget tree.\n'
        'Make sure you:\n'
        '1. Wrapped your app with EaseScope widget: EaseScope(providers: [...], child: MyApp())\n'
        '2. Added {class_name}Provider to your providers list',
      );
    }}
"#,
        class_name = class_name,
    )
}
